//! Askama templates for the web frontend.

use askama::Template;

/// Home page: map, search box, and the create and price forms.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub station_count: usize,

    /// Known regions, offered as suggestions in the price form
    pub regions: Vec<String>,
}
