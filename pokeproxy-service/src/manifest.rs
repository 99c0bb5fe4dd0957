use serde::{
    Deserialize,
    Serialize,
};

/// A resource listed by the discovery endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub name: String,
    /// Path template of the resource.
    pub endpoint: String,
    pub methods: Vec<String>,
}

/// Static description of the resources served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceManifest {
    pub resources: Vec<ResourceDescriptor>,
    pub description: String,
}

fn resource(name: &str, endpoint: &str, method: &str) -> ResourceDescriptor {
    ResourceDescriptor {
        name: name.to_owned(),
        endpoint: endpoint.to_owned(),
        methods: vec![method.to_owned()],
    }
}

pub fn resource_manifest() -> ResourceManifest {
    ResourceManifest {
        resources: vec![
            resource("pokemon-data", "/pokemon/{name_or_id}", "GET"),
            resource("move-data", "/pokemon/move/{name_or_id}", "GET"),
            resource("battle-sim", "/battle/simulate", "POST"),
        ],
        description: "Pokémon data resources and a turn-based battle simulation tool.".to_owned(),
    }
}
