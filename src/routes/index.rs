use askama::Template;
use axum::response::{Html, IntoResponse, Response};

/// Cities offered by the picker on the landing page.
pub const CITIES: &[&str] = &[
    "Delhi",
    "Mumbai",
    "Chennai",
    "Bangalore",
    "Kolkata",
    "Hyderabad",
    "Pune",
    "Jaipur",
    "Ahmedabad",
    "Surat",
    "Kanpur",
    "Lucknow",
    "Nagpur",
    "Visakhapatnam",
    "Bhopal",
    "Indore",
    "Coimbatore",
    "Mysore",
    "Patna",
    "Vadodara",
    "Nashik",
    "Agra",
    "Aurangabad",
    "Ranchi",
    "Thane",
    "Kochi",
    "Tiruchirappalli",
    "Dehradun",
    "Vijayawada",
    "Jodhpur",
    "Rajkot",
    "Guwahati",
    "Srinagar",
    "Amritsar",
    "Dharamshala",
];

#[derive(Template)]
#[template(path = "index.html", escape = "none")]
struct IndexTemplate {
    content: String,
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    cities: &'static [&'static str],
}

pub async fn get_index() -> Response {
    let content = HomeTemplate { cities: CITIES }
        .render()
        .expect("Template rendering should always succeed");
    Html(render_main(content)).into_response()
}

/// Wrap already-rendered page content in the shared page shell.
pub fn render_main(content: String) -> String {
    IndexTemplate { content }
        .render()
        .expect("Template rendering should always succeed")
}
