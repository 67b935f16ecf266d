use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Theme;
use crate::store::DataStore;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run<S: DataStore>(store: &mut S, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            result.add_message(CmdMessage::info(format!("theme = {}", store.load_theme()?)));
            result.add_message(CmdMessage::info(format_cap(store.load_cap()?)));
        }
        ConfigAction::ShowKey(key) => match key.as_str() {
            "theme" => {
                result.add_message(CmdMessage::info(format!("theme = {}", store.load_theme()?)))
            }
            "page-cap" => result.add_message(CmdMessage::info(format_cap(store.load_cap()?))),
            other => {
                result.add_message(CmdMessage::error(format!("Unknown config key: {}", other)))
            }
        },
        ConfigAction::Set(key, value) => match key.as_str() {
            "theme" => match value.parse::<Theme>() {
                Ok(theme) => {
                    store.save_theme(theme)?;
                    result.add_message(CmdMessage::success(format!("theme set to {}", theme)));
                }
                Err(e) => result.add_message(CmdMessage::error(e)),
            },
            "page-cap" => match value.parse::<u32>() {
                Ok(cap) => {
                    store.save_cap(cap)?;
                    result.add_message(CmdMessage::success(format!("page-cap set to {}", cap)));
                }
                Err(_) => result.add_message(CmdMessage::error(format!(
                    "page-cap must be a non-negative integer, got '{}'",
                    value
                ))),
            },
            other => {
                result.add_message(CmdMessage::error(format!("Unknown config key: {}", other)))
            }
        },
    }

    Ok(result)
}

fn format_cap(cap: u32) -> String {
    if cap == 0 {
        "page-cap = 0 (disabled)".to_string()
    } else {
        format!("page-cap = {}", cap)
    }
}
