//! Project file reader
//!
//! Pulls declared cache strategies out of the XML project descriptor:
//!
//! ```xml
//! <project>
//!   <pwa>
//!     <essential-assets>
//!       <asset strategy="critical">/fonts/main.woff2</asset>
//!       <asset>/images/logo.png</asset>
//!     </essential-assets>
//!   </pwa>
//! </project>
//! ```
//!
//! Only `/project/pwa/essential-assets/asset` is read; everything else in
//! the document is ignored.

use std::path::Path;

use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::domain::services::AssetDeclaration;
use crate::error::{PwaError, PwaResult};

/// Default project descriptor name, relative to the project directory
pub const DEFAULT_PROJECT_FILE: &str = "webfx.xml";

const ASSET_PATH: [&str; 4] = ["project", "pwa", "essential-assets", "asset"];

/// Read declarations from `path`; a missing file declares nothing
pub fn load_declarations(path: &Path) -> PwaResult<Vec<AssetDeclaration>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no project file");
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path)?;
    parse_declarations(&content).map_err(|message| PwaError::InvalidProjectFile {
        file: path.to_path_buf(),
        message,
    })
}

/// Parse declarations from project XML
pub fn parse_declarations(xml: &str) -> Result<Vec<AssetDeclaration>, String> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<String> = Vec::new();
    let mut declarations = Vec::new();
    // Text and strategy of the <asset> currently open
    let mut current: Option<(String, Option<String>)> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| format!("XML parse error at position {}: {}", reader.error_position(), e))?;

        match event {
            Event::Start(elem) => {
                stack.push(element_name(&elem));
                if stack == ASSET_PATH {
                    current = Some((String::new(), strategy_attribute(&elem)?));
                }
            }
            Event::Empty(elem) => {
                stack.push(element_name(&elem));
                if stack == ASSET_PATH {
                    declarations.push(AssetDeclaration::new(
                        String::new(),
                        strategy_attribute(&elem)?.as_deref(),
                    ));
                }
                stack.pop();
            }
            Event::Text(text) => {
                if let Some((path, _)) = current.as_mut() {
                    let decoded = text.decode().map_err(|e| e.to_string())?;
                    path.push_str(&decoded);
                }
            }
            Event::CData(data) => {
                if let Some((path, _)) = current.as_mut() {
                    path.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::GeneralRef(entity) => {
                if let Some((path, _)) = current.as_mut() {
                    if let Some(ch) = entity.resolve_char_ref().map_err(|e| e.to_string())? {
                        path.push(ch);
                    } else {
                        let name = entity.decode().map_err(|e| e.to_string())?;
                        let resolved = resolve_predefined_entity(&name)
                            .ok_or_else(|| format!("unknown entity '&{};'", name))?;
                        path.push_str(resolved);
                    }
                }
            }
            Event::End(_) => {
                if stack == ASSET_PATH {
                    if let Some((path, strategy)) = current.take() {
                        declarations.push(AssetDeclaration::new(path.trim(), strategy.as_deref()));
                    }
                }
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(format!("unclosed element <{}>", stack.join("/")));
    }
    Ok(declarations)
}

fn element_name(elem: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(elem.name().as_ref()).into_owned()
}

fn strategy_attribute(elem: &BytesStart<'_>) -> Result<Option<String>, String> {
    let Some(attr) = elem.try_get_attribute("strategy").map_err(|e| e.to_string())? else {
        return Ok(None);
    };
    let raw = String::from_utf8_lossy(&attr.value).into_owned();
    let value = unescape(&raw).map_err(|e| e.to_string())?;
    Ok(Some(value.into_owned()))
}
