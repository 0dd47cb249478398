#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use oxide_ddl::prelude::*;

/// One platform per supported dialect.
pub fn all_platforms() -> Vec<Platform> {
    PlatformKind::ALL.into_iter().map(Platform::new).collect()
}

/// `test (id INT autoincrement, test VARCHAR(255) NULL)` with `id` as key.
pub fn test_table() -> Table {
    Table::new("test")
        .column(Column::new("id", TypeKind::Integer).autoincrement())
        .column(Column::new("test", TypeKind::String).length(255).nullable())
        .primary_key(["id"])
}

/// Index of the first statement containing `needle`.
pub fn position(sql: &[String], needle: &str) -> usize {
    sql.iter()
        .position(|statement| statement.contains(needle))
        .unwrap_or_else(|| panic!("No statement contains '{needle}': {sql:#?}"))
}

/// Listener recording every hook it sees and appending a marker statement.
#[derive(Debug, Default)]
pub struct Recorder {
    pub seen: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                seen: Arc::clone(&seen),
            },
            seen,
        )
    }
}

impl SchemaListener for Recorder {
    fn on_event(&self, phase: HookPhase, event: &SchemaEvent<'_>, sql: &mut Vec<String>) {
        let marker = format!("-- {phase:?} {}", event.name());
        self.seen.lock().unwrap().push(marker.clone());
        sql.push(marker);
    }
}
