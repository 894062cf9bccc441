//! One-shot subcommands: run a single request through the same async
//! dispatchers as the category screen and print the result.

use std::io::Write;

use anyhow::{bail, Context, Result};

use crate::api::{
    AuthApi, Category, CategoryApi, CategoryId, LoginRequest, NewCategory, RegisterRequest,
};
use crate::ui::categories::{
    create_category, edit_category, fetch_all_categories, remove_category, CategoryReducer,
};
use crate::ui::mvi::Store;

fn id_label(category: &Category) -> &str {
    category.id.as_ref().map_or("-", CategoryId::as_str)
}

pub async fn list<A, W>(api: &A, out: &mut W) -> Result<()>
where
    A: CategoryApi + ?Sized,
    W: Write,
{
    let mut store = Store::<CategoryReducer>::default();
    fetch_all_categories(api, &mut store)
        .await
        .context("Failed to load categories")?;

    let categories = &store.state().categories;
    if categories.is_empty() {
        writeln!(out, "No categories.")?;
        return Ok(());
    }

    let width = categories
        .iter()
        .map(|c| id_label(c).len())
        .max()
        .unwrap_or(2)
        .max(2);
    writeln!(out, "{:<width$}  NAME", "ID")?;
    for category in categories {
        writeln!(out, "{:<width$}  {}", id_label(category), category.name)?;
    }
    Ok(())
}

pub async fn add<A, W>(api: &A, name: &str, out: &mut W) -> Result<()>
where
    A: CategoryApi + ?Sized,
    W: Write,
{
    let name = name.trim();
    if name.is_empty() {
        bail!("Category name must not be empty");
    }

    let mut store = Store::<CategoryReducer>::default();
    let created = create_category(api, &mut store, NewCategory::new(name))
        .await
        .with_context(|| format!("Failed to create category '{}'", name))?;
    writeln!(out, "Created category {} '{}'", id_label(&created), created.name)?;
    Ok(())
}

pub async fn rename<A, W>(api: &A, id: &str, name: &str, out: &mut W) -> Result<()>
where
    A: CategoryApi + ?Sized,
    W: Write,
{
    let name = name.trim();
    if name.is_empty() {
        bail!("Category name must not be empty");
    }

    let id = CategoryId::from(id);
    let mut store = Store::<CategoryReducer>::default();
    let updated = edit_category(api, &mut store, id.clone(), Category::new(id.clone(), name))
        .await
        .with_context(|| format!("Failed to rename category {}", id))?;
    writeln!(out, "Renamed category {} to '{}'", id, updated.name)?;
    Ok(())
}

pub async fn delete<A, W>(api: &A, id: &str, out: &mut W) -> Result<()>
where
    A: CategoryApi + ?Sized,
    W: Write,
{
    let id = CategoryId::from(id);
    let mut store = Store::<CategoryReducer>::default();
    remove_category(api, &mut store, id.clone())
        .await
        .with_context(|| format!("Failed to delete category {}", id))?;
    writeln!(out, "Deleted category {}", id)?;
    Ok(())
}

pub async fn login<W: Write>(
    auth: &AuthApi,
    username: &str,
    password: &str,
    out: &mut W,
) -> Result<()> {
    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let response = auth.login(&request).await.context("Login failed")?;

    if let Some(error) = response.error.filter(|e| !e.is_empty()) {
        bail!("Login failed: {}", error);
    }
    let Some(token) = response.token.filter(|t| !t.is_empty()) else {
        bail!("Login failed: service returned no token");
    };
    writeln!(out, "{}", token)?;
    Ok(())
}

pub async fn register<W: Write>(
    auth: &AuthApi,
    username: &str,
    password: &str,
    admin: bool,
    out: &mut W,
) -> Result<()> {
    let request = RegisterRequest {
        username: username.to_string(),
        password: password.to_string(),
        profile_url: String::new(),
        is_admin: admin,
    };
    let user = auth.register(&request).await.context("Registration failed")?;
    writeln!(out, "{}", serde_json::to_string_pretty(&user)?)?;
    Ok(())
}
