use std::env;
use std::path::Path;

use log::debug;

use recipe_cards::{
    AppConfig, FormInput, ImageUpload, RecipeApp, RecipeClient, RecipeView, ViewOptions,
};

const USAGE: &str = "Usage: recipe-cards <command>
Commands:
  list [--json]                                      fetch and render all recipes
  search <id|name>                                   fetch one recipe by id, or by name keyword
  add <name> <ingredients> <instructions> <location> [image-path]
  update <id> <name> <ingredients> <instructions> <location> [image-path]
  patch <id> <field>=<value>... [image=<path>]       fields: name, ingredients, instructions, location
  delete <id>";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load()?;
    debug!("using API at {}", config.base_url);

    let client = RecipeClient::from_config(&config);
    let view = RecipeView::new(&config.base_url, ViewOptions::from(&config.view));
    let mut app = RecipeApp::new(client, view);

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(String::as_str).ok_or(USAGE)?;

    match command {
        "list" => {
            if args.get(2).map(String::as_str) == Some("--json") {
                let recipes = recipe_cards::fetch_recipes(&config.base_url).await?;
                println!("{}", serde_json::to_string_pretty(&recipes)?);
            } else {
                app.refresh().await?;
                println!("{}", app.html());
            }
        }
        "search" => {
            let term = args.get(2).ok_or(USAGE)?;
            match term.parse::<u64>() {
                Ok(id) => app.show_by_id(id).await?,
                Err(_) => app.show_by_name(term).await?,
            }
            println!("{}", app.html());
        }
        "add" => {
            let mut input = positional_input(None, &args[2..])?;
            if let Some(path) = args.get(6) {
                input.image = Some(read_image(path).await?);
            }
            let payload = input.collect(false).ok_or("No data provided")?;
            let created = app.create(payload).await?;
            println!("Created recipe {} ({})", created.id, created.name);
        }
        "update" => {
            let id = args.get(2).ok_or(USAGE)?;
            let mut input = positional_input(Some(id), &args[3..])?;
            if let Some(path) = args.get(7) {
                input.image = Some(read_image(path).await?);
            }
            let payload = input.collect(false).ok_or("No data provided")?;
            let updated = app.update(payload).await?;
            println!("Updated recipe {} ({})", updated.id, updated.name);
        }
        "patch" => {
            let id = args.get(2).ok_or(USAGE)?;
            let input = keyed_input(id, &args[3..]).await?;
            let payload = input.collect(true).ok_or("No data provided")?;
            let patched = app.patch(payload).await?;
            println!("Patched recipe {} ({})", patched.id, patched.name);
        }
        "delete" => {
            let id = args.get(2).ok_or(USAGE)?.parse()?;
            let message = app.delete(id).await?;
            println!("{}", message);
        }
        _ => return Err(USAGE.into()),
    }

    Ok(())
}

/// Form input from positional arguments, for add and update.
fn positional_input(
    id: Option<&str>,
    rest: &[String],
) -> Result<FormInput, Box<dyn std::error::Error>> {
    if rest.len() < 4 {
        return Err(USAGE.into());
    }

    Ok(FormInput {
        id: id.unwrap_or_default().to_string(),
        name: rest[0].clone(),
        ingredients: rest[1].clone(),
        instructions: rest[2].clone(),
        location: rest[3].clone(),
        ..FormInput::default()
    })
}

/// Form input from `field=value` pairs, for patch.
async fn keyed_input(id: &str, pairs: &[String]) -> Result<FormInput, Box<dyn std::error::Error>> {
    let mut input = FormInput {
        id: id.to_string(),
        ..FormInput::default()
    };

    for pair in pairs {
        let (key, value) = pair.split_once('=').ok_or(USAGE)?;
        match key {
            "name" => input.name = value.to_string(),
            "ingredients" => input.ingredients = value.to_string(),
            "instructions" => input.instructions = value.to_string(),
            "location" => input.location = value.to_string(),
            "image" => input.image = Some(read_image(value).await?),
            _ => return Err(USAGE.into()),
        }
    }
    Ok(input)
}

async fn read_image(path: &str) -> Result<ImageUpload, std::io::Error> {
    let bytes = tokio::fs::read(path).await?;
    Ok(ImageUpload::new(file_name_of(path), bytes))
}

fn file_name_of(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload")
        .to_string()
}
