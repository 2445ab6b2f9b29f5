pub const CREATE_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS watch_later (
        video_id INTEGER PRIMARY KEY
    );

    CREATE TABLE IF NOT EXISTS resume (
        video_id INTEGER PRIMARY KEY,
        position_ms INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS session_state (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
";

pub const GET_WATCH_LATER: &str = "
    SELECT video_id FROM watch_later
";

pub const INSERT_WATCH_LATER: &str = "
    INSERT OR IGNORE INTO watch_later (video_id)
    VALUES (?1)
";

pub const DELETE_WATCH_LATER: &str = "
    DELETE FROM watch_later WHERE video_id = ?1
";

pub const SET_RESUME: &str = "
    INSERT OR REPLACE INTO resume (video_id, position_ms)
    VALUES (?1, ?2)
";

pub const GET_RESUME: &str = "
    SELECT position_ms FROM resume WHERE video_id = ?1
";

pub const DELETE_RESUME: &str = "
    DELETE FROM resume WHERE video_id = ?1
";

pub const SET_SESSION_STATE: &str = "
    INSERT OR REPLACE INTO session_state (key, value)
    VALUES (?1, ?2)
";

pub const GET_SESSION_STATE: &str = "
    SELECT value FROM session_state WHERE key = ?1
";

pub const GET_UI_SNAPSHOT: &str = "
    SELECT key, value FROM session_state WHERE key LIKE 'ui_%'
";
