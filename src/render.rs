use crate::config::ViewConfig;
use crate::model::Recipe;
use crate::node::{el, Node};

/// Marker sequence the API stores in instruction text: the four literal
/// characters backslash-r-backslash-n, not an actual CRLF.
const ESCAPED_NEWLINE: &str = "\\r\\n";

/// Flags selecting which optional pieces each card carries. The pages this
/// client serves differ only in these details, so they are options on one
/// view rather than separate renderers.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub container_id: String,
    pub show_location: bool,
    pub show_actions: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            container_id: "recipe-container".to_string(),
            show_location: true,
            show_actions: true,
        }
    }
}

impl From<&ViewConfig> for ViewOptions {
    fn from(config: &ViewConfig) -> Self {
        Self {
            container_id: config.container_id.clone(),
            show_location: config.show_location,
            show_actions: config.show_actions,
        }
    }
}

/// Renders recipe records into container markup.
///
/// Every call rebuilds the whole container from its input; there is no
/// diffing and no state besides the arguments.
pub struct RecipeView {
    base_url: String,
    options: ViewOptions,
}

impl RecipeView {
    pub fn new(base_url: impl Into<String>, options: ViewOptions) -> Self {
        Self {
            base_url: base_url.into(),
            options,
        }
    }

    /// Build the container holding one card per recipe, in input order.
    /// An empty input yields a placeholder paragraph instead.
    pub fn render(&self, recipes: &[Recipe]) -> Node {
        let container = el("div").attr("id", &self.options.container_id);

        if recipes.is_empty() {
            return container.child(el("p").text("No recipes found.")).into();
        }

        container
            .children(recipes.iter().map(|recipe| self.card(recipe)))
            .into()
    }

    /// Build the container holding only an error message.
    pub fn render_error(&self, message: &str) -> Node {
        el("div")
            .attr("id", &self.options.container_id)
            .child(
                el("p")
                    .class("error")
                    .text(format!("Error: {}", message)),
            )
            .into()
    }

    fn card(&self, recipe: &Recipe) -> Node {
        let mut info = el("div")
            .class("info")
            .child(el("h3").text(&recipe.name));

        if self.options.show_location {
            info = info.child(
                el("p")
                    .child(el("strong").text("Location:"))
                    .text(format!(" {}", recipe.location)),
            );
        }

        info = info
            .child(el("p").child(el("strong").text("Ingredients:")))
            .child(el("ul").children(
                recipe.ingredients.iter().map(|item| el("li").text(item).into()),
            ));

        let mut instructions = el("div")
            .class("instructions")
            .child(el("p").child(el("strong").text("Instructions:")))
            .child(el("p").children(instruction_lines(&recipe.instructions)));

        if self.options.show_actions {
            let id = recipe.id.to_string();
            instructions = instructions
                .child(
                    el("button")
                        .class("delete-btn")
                        .attr("data-recipe-id", &id)
                        .text("Delete"),
                )
                .child(
                    el("button")
                        .class("edit-btn")
                        .attr("data-recipe-id", &id)
                        .text("Edit"),
                );
        }

        el("div")
            .class("recipe-card")
            .child(
                el("img")
                    .attr("src", self.image_url(&recipe.image))
                    .attr("alt", &recipe.name),
            )
            .child(info)
            .child(instructions)
            .into()
    }

    fn image_url(&self, relative: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            relative.trim_start_matches('/')
        )
    }
}

/// Split instruction text on the stored `\r\n` escape sequence, yielding
/// text nodes separated by `<br>` elements.
fn instruction_lines(text: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    for (index, line) in text.split(ESCAPED_NEWLINE).enumerate() {
        if index > 0 {
            nodes.push(el("br").into());
        }
        nodes.push(Node::text(line));
    }
    nodes
}
