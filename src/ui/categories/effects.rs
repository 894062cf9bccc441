//! Async dispatchers: call the service, then dispatch the resulting delta.
//!
//! None of these recover from errors. A failed call dispatches nothing
//! (except the loading reset in [`fetch_all_categories`]) and the error is
//! returned unchanged to the caller.

use crate::api::{ApiError, Category, CategoryApi, CategoryId, NewCategory};
use crate::ui::mvi::Dispatch;

use super::intent::{
    add_category, delete_category, set_categories, set_loading, update_category,
    CategoryIntent,
};

/// Load the full collection.
///
/// `SetLoading { flag: false }` is always the last intent dispatched,
/// whether the call succeeded or not.
pub async fn fetch_all_categories<A, D>(api: &A, dispatch: &mut D) -> Result<(), ApiError>
where
    A: CategoryApi + ?Sized,
    D: Dispatch<CategoryIntent>,
{
    dispatch.dispatch(set_loading(true));
    let result = api.list().await;
    let outcome = match result {
        Ok(list) => {
            tracing::debug!(count = list.len(), "Categories loaded");
            dispatch.dispatch(set_categories(list));
            Ok(())
        }
        Err(err) => Err(err),
    };
    dispatch.dispatch(set_loading(false));
    outcome
}

/// Create a category and append the stored copy returned by the service.
pub async fn create_category<A, D>(
    api: &A,
    dispatch: &mut D,
    category: NewCategory,
) -> Result<Category, ApiError>
where
    A: CategoryApi + ?Sized,
    D: Dispatch<CategoryIntent>,
{
    let created = api.create(&category).await?;
    dispatch.dispatch(add_category(created.clone()));
    Ok(created)
}

/// Update a category and replace the local entry with the service's copy.
pub async fn edit_category<A, D>(
    api: &A,
    dispatch: &mut D,
    id: CategoryId,
    category: Category,
) -> Result<Category, ApiError>
where
    A: CategoryApi + ?Sized,
    D: Dispatch<CategoryIntent>,
{
    let updated = api.update(&id, &category).await?;
    dispatch.dispatch(update_category(id, updated.clone()));
    Ok(updated)
}

/// Delete a category and drop it from the collection.
pub async fn remove_category<A, D>(
    api: &A,
    dispatch: &mut D,
    id: CategoryId,
) -> Result<(), ApiError>
where
    A: CategoryApi + ?Sized,
    D: Dispatch<CategoryIntent>,
{
    api.delete(&id).await?;
    dispatch.dispatch(delete_category(id));
    Ok(())
}
