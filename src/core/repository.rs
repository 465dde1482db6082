use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;
use crate::gateway::GatewayPublisherVia;

pub trait Repository<Entity> {
    // create an entity, rejecting a duplicate id
    fn create(&mut self, entity: Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<&Entity>;

    // delete an entity and hand it back
    fn delete(&mut self, id: &str) -> LibraryResult<Entity>;

    // all entities in insertion order
    fn all(&self) -> &[Entity];
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    InMemory,
}

impl RepositoryStore {
    pub fn gateway_publisher(&self) -> GatewayPublisherVia {
        match self {
            RepositoryStore::InMemory => GatewayPublisherVia::Logs,
        }
    }
}
