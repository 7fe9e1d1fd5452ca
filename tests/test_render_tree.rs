use recipe_cards::{el, Node, Recipe, RecipeView, ViewOptions};

fn recipe(id: u64, name: &str) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        image: format!("img/{}.png", id),
        ingredients: vec!["water".to_string()],
        instructions: "Stir".to_string(),
        location: "Kitchen".to_string(),
    }
}

fn view() -> RecipeView {
    RecipeView::new("https://api.example.com", ViewOptions::default())
}

#[test]
fn empty_render_is_the_placeholder_tree() {
    let expected: Node = el("div")
        .attr("id", "recipe-container")
        .child(el("p").text("No recipes found."))
        .into();

    assert_eq!(view().render(&[]), expected);
}

#[test]
fn rerender_replaces_previous_cards() {
    let view = view();
    let first = view.render(&[recipe(1, "Soup"), recipe(2, "Stew")]).to_html();
    assert_eq!(first.matches("recipe-card").count(), 2);

    // a later render reflects only its own input, nothing left over
    let second = view.render(&[recipe(2, "Stew")]).to_html();
    assert_eq!(second.matches("recipe-card").count(), 1);
    assert!(!second.contains("Soup"));
}

#[test]
fn cards_keep_input_order() {
    let names = ["Soup", "Stew", "Salad"];
    let recipes: Vec<Recipe> = names
        .iter()
        .enumerate()
        .map(|(index, name)| recipe(index as u64 + 1, name))
        .collect();

    let html = view().render(&recipes).to_html();
    let positions: Vec<usize> = names.iter().map(|name| html.find(name).unwrap()).collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn markup_is_injection_safe() {
    let hostile = Recipe {
        name: "<img onerror=x>".to_string(),
        instructions: "<script>evil()</script>".to_string(),
        ..recipe(1, "")
    };

    let html = view().render(&[hostile]).to_html();
    assert!(!html.contains("<img onerror"));
    assert!(!html.contains("<script>"));
}
