//! Options for `FieldKind::Select` inputs, keyed by lookup name

use contracts::domain::common::EntityRecord;
use contracts::shared::api_error::ApiError;
use contracts::system::accounts::AccountStatus;

use super::{a001_branch, a002_room, a003_seat, a009_type_day};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

pub fn options_from<E: EntityRecord>(items: &[E]) -> Vec<SelectOption> {
    items
        .iter()
        .map(|item| SelectOption {
            value: item.record_id().to_string(),
            label: item.display_name(),
        })
        .collect()
}

/// Options that need no request
fn static_options(lookup: &str) -> Option<Vec<SelectOption>> {
    match lookup {
        "account_status" => Some(
            [AccountStatus::Active, AccountStatus::Pending, AccountStatus::Deleted]
                .iter()
                .map(|s| SelectOption {
                    value: s.as_str().to_string(),
                    label: s.label().to_string(),
                })
                .collect(),
        ),
        _ => None,
    }
}

pub async fn load_options(lookup: &str) -> Result<Vec<SelectOption>, ApiError> {
    if let Some(options) = static_options(lookup) {
        return Ok(options);
    }
    match lookup {
        "branches" => Ok(options_from(&a001_branch::api::list_branches().await?)),
        "rooms" => Ok(options_from(&a002_room::api::list_rooms().await?)),
        "my_rooms" => Ok(options_from(&a002_room::api::list_my_branch_rooms().await?)),
        "type_seats" => Ok(options_from(&a003_seat::api::list_type_seats().await?)),
        "type_days" => Ok(options_from(&a009_type_day::api::list_type_days().await?)),
        other => {
            log::error!("Unknown lookup '{}'", other);
            Ok(Vec::new())
        }
    }
}
