//! Database schema.
//!
//! Statements are idempotent and run on every connect, so a fresh database
//! file is initialised on first start.

/// SQL to create the characters table.
pub const CREATE_CHARACTERS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS characters (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
)
";

/// SQL to create the quests table.
pub const CREATE_QUESTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS quests (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    description  TEXT NOT NULL,
    xp           INTEGER NOT NULL DEFAULT 0,
    completed    BOOLEAN NOT NULL DEFAULT 0,
    character_id INTEGER NOT NULL REFERENCES characters (id)
)
";

/// SQL to index quests by owner in FIFO order.
pub const CREATE_QUESTS_CHARACTER_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_quests_character_id
    ON quests (character_id, id)
";

/// All schema statements, in execution order.
pub const SCHEMA: &[&str] = &[
    CREATE_CHARACTERS_TABLE,
    CREATE_QUESTS_TABLE,
    CREATE_QUESTS_CHARACTER_INDEX,
];
