use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::ticket::TicketTemplate;
use crate::domain::ticket_type::TicketTypeId;
use crate::error::{AppError, AppResult};
use crate::services::TemplateStore;

/// Templates read from `{dir}/{type}ticketexample.json`, loaded once.
pub struct FileTemplateStore {
    dir: PathBuf,
    templates: HashMap<TicketTypeId, TicketTemplate>,
}

impl FileTemplateStore {
    /// Loads every catalog template found in `dir`. Missing or malformed files are
    /// logged and left unresolvable.
    pub fn load(dir: &Path) -> Self {
        if !dir.is_dir() {
            warn!(
                dir = %dir.display(),
                "payload directory not found; no ticket type will resolve"
            );
        }

        let mut templates = HashMap::new();
        for ticket_type in TicketTypeId::ALL {
            let path = dir.join(ticket_type.template_file_name());
            match read_template(&path) {
                Ok(template) => {
                    templates.insert(ticket_type, template);
                }
                Err(err) => warn!(
                    ticket_type = ticket_type.as_str(),
                    path = %path.display(),
                    "template unavailable: {err}"
                ),
            }
        }

        info!(
            loaded = templates.len(),
            total = TicketTypeId::ALL.len(),
            dir = %dir.display(),
            "ticket templates loaded"
        );

        Self {
            dir: dir.to_path_buf(),
            templates,
        }
    }

    pub fn from_templates(templates: HashMap<TicketTypeId, TicketTemplate>) -> Self {
        Self {
            dir: PathBuf::new(),
            templates,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TemplateStore for FileTemplateStore {
    fn resolve(&self, ticket_type: TicketTypeId) -> Option<&TicketTemplate> {
        self.templates.get(&ticket_type)
    }
}

fn read_template(path: &Path) -> AppResult<TicketTemplate> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|err| AppError::Template(err.to_string()))
}
