use serde::{Deserialize, Serialize};

use super::{impl_ordered, normalize_items, require, ContentKind, SubCollection};
use crate::error::FieldError;

/// The "Our Client" logo wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ClientContent {
    pub title: String,
    pub description: String,
    pub clients: Vec<Client>,
}

impl Default for ClientContent {
    fn default() -> Self {
        Self {
            title: "Our Client".into(),
            description: "At VVWorx, we've had the opportunity to collaborate with brands across real estate, technology, and consumer verticals. Here are some of the amazing clients who trust our work.".into(),
            clients: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub order: i32,
}

impl_ordered!(Client);

impl ContentKind for ClientContent {
    const COLLECTION: &'static str = "clientcontents";
    const LABEL: &'static str = "Client content";

    fn normalize(&mut self) {
        normalize_items(&mut self.clients);
    }

    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for (i, client) in self.clients.iter().enumerate() {
            require(&mut errors, format!("clients[{}].name", i), &client.name, "Client name");
        }
        errors
    }
}

/// `/:id/clients`
pub struct Clients;

impl SubCollection<ClientContent> for Clients {
    type Item = Client;
    const PATH: &'static str = "clients";
    const LABEL: &'static str = "Client";

    fn items(content: &ClientContent) -> &Vec<Client> {
        &content.clients
    }

    fn items_mut(content: &mut ClientContent) -> &mut Vec<Client> {
        &mut content.clients
    }
}
