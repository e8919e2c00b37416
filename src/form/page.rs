//! Page assembly: a form plus its foreign-key selects, the unit every
//! per-entity create/edit view is built from.

use crate::client::{ApiClient, ClientError};
use crate::form::cache::RecordCache;
use crate::form::select::{fk_selects, FkSelect};
use crate::form::state::FormPage;
use crate::schema::AdminModel;

#[derive(Debug)]
pub struct PageSetup {
    pub form: FormPage,
    pub selects: Vec<FkSelect>,
}

/// Create page: empty form; select options load from the related endpoints.
pub async fn create_page(
    model: &AdminModel,
    path_segment: &str,
    client: &ApiClient,
) -> Result<PageSetup, ClientError> {
    let entity = model
        .entity_by_path(path_segment)
        .ok_or_else(|| ClientError::UnknownEntity(path_segment.to_string()))?;
    let mut selects = fk_selects(entity);
    for s in &mut selects {
        s.load(client).await?;
    }
    Ok(PageSetup {
        form: FormPage::create(entity),
        selects,
    })
}

/// Edit page: record fetch (through the cache) and option loads run
/// concurrently; the page is ready only once both have completed.
pub async fn edit_page(
    model: &AdminModel,
    path_segment: &str,
    id: &str,
    client: &ApiClient,
    cache: &mut RecordCache,
) -> Result<PageSetup, ClientError> {
    let entity = model
        .entity_by_path(path_segment)
        .ok_or_else(|| ClientError::UnknownEntity(path_segment.to_string()))?;
    let mut selects = fk_selects(entity);

    let record_fut = cache.get_or_fetch(client, entity, id);
    let selects_fut = async {
        for s in &mut selects {
            s.load(client).await?;
        }
        Ok::<_, ClientError>(())
    };
    let (record, loaded) = tokio::join!(record_fut, selects_fut);
    loaded?;
    let record = record?;

    Ok(PageSetup {
        form: FormPage::edit(entity, id, &record),
        selects,
    })
}
