use crate::domain::ticket_type::TicketTypeId;
use crate::infra::templates::FileTemplateStore;
use crate::services::TemplateStore;

pub fn run(templates: &FileTemplateStore) {
    println!("Templates from {}", templates.dir().display());
    for id in TicketTypeId::ALL {
        let status = if templates.resolve(id).is_some() {
            "ok"
        } else {
            "missing"
        };
        println!(
            "{:<22} {:<24} {:<40} {status}",
            id.as_str(),
            id.label(),
            id.template_file_name()
        );
    }
}
