//! SQL schema for the Callboard SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Pending submissions only. Terminal decisions delete the row; the publish
-- side effect (a master record or a reply) is the only durable trace.
CREATE TABLE IF NOT EXISTS submissions (
    submission_id TEXT PRIMARY KEY,
    kind          TEXT NOT NULL,   -- 'artist' | 'song' | 'chant' | 'inquiry'
    owner_id      TEXT,
    payload_json  TEXT NOT NULL,   -- kind-specific draft (inner data only)
    status        TEXT NOT NULL DEFAULT 'pending',
    created_at    TEXT NOT NULL    -- ISO 8601 UTC; server-assigned
);

CREATE TABLE IF NOT EXISTS artists (
    artist_id   TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    reading     TEXT,
    profile_url TEXT,
    created_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS songs (
    song_id        TEXT PRIMARY KEY,
    title          TEXT NOT NULL,
    artist_id      TEXT,
    streaming_json TEXT NOT NULL DEFAULT '{}',
    created_at     TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS chants (
    chant_id       TEXT PRIMARY KEY,
    title          TEXT NOT NULL,
    content        TEXT NOT NULL,
    measures       INTEGER NOT NULL CHECK (measures > 0),
    reference_url  TEXT,
    owner_id       TEXT,
    bookmark_count INTEGER NOT NULL DEFAULT 0,
    created_at     TEXT NOT NULL
);

-- Author-published: rows are inserted already 'approved'.
CREATE TABLE IF NOT EXISTS call_charts (
    chart_id   TEXT PRIMARY KEY,
    title      TEXT NOT NULL,
    song_id    TEXT,
    owner_id   TEXT NOT NULL,
    status     TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS sections (
    section_id TEXT PRIMARY KEY,
    chart_id   TEXT NOT NULL REFERENCES call_charts(chart_id),
    position   INTEGER NOT NULL,
    location   TEXT NOT NULL,
    content    TEXT NOT NULL,
    chant_id   TEXT
);

CREATE TABLE IF NOT EXISTS bulletin_posts (
    post_id    TEXT PRIMARY KEY,
    title      TEXT NOT NULL,
    body       TEXT NOT NULL,
    event_date TEXT,             -- calendar date, no time component
    url        TEXT,
    owner_id   TEXT,
    status     TEXT NOT NULL DEFAULT 'pending',
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS reports (
    report_id   TEXT PRIMARY KEY,
    target_kind TEXT NOT NULL,   -- 'chant' | 'call_chart'
    target_id   TEXT NOT NULL,
    category    TEXT NOT NULL,   -- 'correction' | 'abuse'
    reason      TEXT,
    details     TEXT,
    reporter_id TEXT,
    status      TEXT,            -- NULL means pending (legacy rows)
    created_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS replies (
    reply_id   TEXT PRIMARY KEY,
    content    TEXT NOT NULL,
    category   TEXT NOT NULL,
    response   TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS bookmarks (
    user_id     TEXT NOT NULL,
    target_kind TEXT NOT NULL,
    target_id   TEXT NOT NULL,
    category    TEXT NOT NULL,   -- 'practice' | 'favorite'
    created_at  TEXT NOT NULL,
    UNIQUE (user_id, target_kind, target_id)
);

CREATE INDEX IF NOT EXISTS submissions_kind_idx    ON submissions(kind);
CREATE INDEX IF NOT EXISTS submissions_created_idx ON submissions(created_at);
CREATE INDEX IF NOT EXISTS sections_chart_idx      ON sections(chart_id);
CREATE INDEX IF NOT EXISTS reports_status_idx      ON reports(status);
CREATE INDEX IF NOT EXISTS bookmarks_user_idx      ON bookmarks(user_id);

PRAGMA user_version = 1;
";
