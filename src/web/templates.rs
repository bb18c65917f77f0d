use crate::errors::AppResult;
use tera::Tera;

/// Load the embedded view templates.
pub fn load() -> AppResult<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("templates/base.html")),
        ("table.html", include_str!("templates/table.html")),
        ("form.html", include_str!("templates/form.html")),
        ("notes.html", include_str!("templates/notes.html")),
    ])?;
    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_templates_parse() {
        let tera = load().unwrap();
        let mut names: Vec<&str> = tera.get_template_names().collect();
        names.sort();
        assert_eq!(names, vec!["base.html", "form.html", "notes.html", "table.html"]);
    }
}
