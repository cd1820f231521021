use crate::output;

use color_eyre::Result;
use unicode_width::UnicodeWidthStr;

use catalog_service::Catalog;

/// Print the users that can be passed to `list --owner`
pub fn users(catalog: &Catalog) -> Result<()> {
    output::status("Users", &format!("{} total", catalog.users().len()));
    let width = name_width(catalog.users().iter().map(|u| u.name.as_str()));
    for user in catalog.users() {
        let owned = catalog
            .categories()
            .iter()
            .filter(|c| c.owner_id == user.id)
            .count();
        println!(
            "  {:>3}  {}  {}  ({} categories)",
            user.id,
            output::pad(&user.name, width),
            user.sex,
            owned
        );
    }
    Ok(())
}

/// Print the categories that can be passed to `list --category`
pub fn categories(catalog: &Catalog) -> Result<()> {
    output::status(
        "Categories",
        &format!("{} total", catalog.categories().len()),
    );
    let width = name_width(catalog.categories().iter().map(|c| c.title.as_str()));
    for category in catalog.categories() {
        let owner = catalog
            .user(category.owner_id)
            .map(|u| u.name.as_str())
            .unwrap_or("?");
        println!(
            "  {:>3}  {} {}  owner: {}",
            category.id,
            category.icon,
            output::pad(&category.title, width),
            owner
        );
    }
    Ok(())
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|name| name.width()).max().unwrap_or(0)
}
