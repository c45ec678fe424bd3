//! [`SqliteStore`] — the SQLite implementation of [`ContentStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use callboard_core::{
  bookmark::{Bookmark, BookmarkCategory},
  record::{
    Artist, BulletinPost, CallChart, Chant, ChartView, ContentTarget,
    NewArtist, NewBulletinPost, NewChant, NewChart, NewReply, NewSong,
    PublishStatus, Reply, Song,
  },
  report::{NewReport, Report, ReportStatus},
  submission::{
    NewSubmission, Submission, SubmissionKind, SubmissionStatus,
  },
  store::{BookmarkWrite, ContentStore, PendingCounts},
};

use crate::{
  encode::{
    encode_bookmark_category, encode_date, encode_dt, encode_inquiry_category,
    encode_publish_status, encode_report_category, encode_report_status,
    encode_streaming, encode_submission_kind, encode_target_kind, encode_uuid,
    RawArtist, RawBookmark, RawChant, RawChart, RawPost, RawReply, RawReport,
    RawSection, RawSong, RawSubmission,
  },
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Callboard content store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ContentStore impl ───────────────────────────────────────────────────────

impl ContentStore for SqliteStore {
  type Error = Error;

  // ── Submissions ───────────────────────────────────────────────────────────

  async fn add_submission(&self, input: NewSubmission) -> Result<Submission> {
    let submission = Submission {
      submission_id: Uuid::new_v4(),
      owner_id:      input.owner_id,
      payload:       input.payload,
      status:        SubmissionStatus::Pending,
      created_at:    Utc::now(),
    };

    let id_str      = encode_uuid(submission.submission_id);
    let kind_str    = submission.payload.discriminant().to_owned();
    let owner_str   = submission.owner_id.map(encode_uuid);
    let payload_str = submission.payload.to_json().map_err(Error::Core)?.to_string();
    let at_str      = encode_dt(submission.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO submissions (submission_id, kind, owner_id, payload_json, status, created_at)
           VALUES (?1, ?2, ?3, ?4, 'pending', ?5)",
          rusqlite::params![id_str, kind_str, owner_str, payload_str, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(submission)
  }

  async fn get_submission(&self, id: Uuid) -> Result<Option<Submission>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawSubmission> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT submission_id, kind, owner_id, payload_json, created_at
             FROM submissions WHERE submission_id = ?1",
            rusqlite::params![id_str],
            |row| {
              Ok(RawSubmission {
                submission_id: row.get(0)?,
                kind:          row.get(1)?,
                owner_id:      row.get(2)?,
                payload_json:  row.get(3)?,
                created_at:    row.get(4)?,
              })
            },
          )
          .optional()?)
      })
      .await?;

    raw.map(RawSubmission::into_submission).transpose()
  }

  async fn list_submissions(
    &self,
    kind: Option<SubmissionKind>,
  ) -> Result<Vec<Submission>> {
    let kind_str = kind.map(encode_submission_kind).map(str::to_owned);

    let raws: Vec<RawSubmission> = self
      .conn
      .call(move |conn| {
        let map_row = |row: &rusqlite::Row<'_>| {
          Ok(RawSubmission {
            submission_id: row.get(0)?,
            kind:          row.get(1)?,
            owner_id:      row.get(2)?,
            payload_json:  row.get(3)?,
            created_at:    row.get(4)?,
          })
        };

        let rows = if let Some(k) = kind_str {
          let mut stmt = conn.prepare(
            "SELECT submission_id, kind, owner_id, payload_json, created_at
             FROM submissions WHERE kind = ?1 ORDER BY created_at DESC",
          )?;
          stmt
            .query_map(rusqlite::params![k], map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        } else {
          let mut stmt = conn.prepare(
            "SELECT submission_id, kind, owner_id, payload_json, created_at
             FROM submissions ORDER BY created_at DESC",
          )?;
          stmt
            .query_map([], map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSubmission::into_submission).collect()
  }

  async fn delete_submission(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);

    // Deleting an absent row is success; the affected-row count is ignored.
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "DELETE FROM submissions WHERE submission_id = ?1",
          rusqlite::params![id_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn pending_counts(&self) -> Result<PendingCounts> {
    let counts = self
      .conn
      .call(|conn| {
        let by_kind = |conn: &rusqlite::Connection, kind: &str| {
          conn.query_row(
            "SELECT COUNT(*) FROM submissions WHERE kind = ?1",
            rusqlite::params![kind],
            |r| r.get::<_, i64>(0),
          )
        };

        let artists   = by_kind(conn, "artist")?;
        let songs     = by_kind(conn, "song")?;
        let chants    = by_kind(conn, "chant")?;
        let inquiries = by_kind(conn, "inquiry")?;

        let bulletin_posts: i64 = conn.query_row(
          "SELECT COUNT(*) FROM bulletin_posts WHERE status = 'pending'",
          [],
          |r| r.get(0),
        )?;

        let reports: i64 = conn.query_row(
          "SELECT COUNT(*) FROM reports WHERE status IS NULL OR status = 'pending'",
          [],
          |r| r.get(0),
        )?;

        Ok(PendingCounts {
          artists:        artists as usize,
          songs:          songs as usize,
          chants:         chants as usize,
          inquiries:      inquiries as usize,
          bulletin_posts: bulletin_posts as usize,
          reports:        reports as usize,
        })
      })
      .await?;

    Ok(counts)
  }

  // ── Master records ────────────────────────────────────────────────────────

  async fn add_artist(&self, input: NewArtist) -> Result<Artist> {
    let artist = Artist {
      artist_id:   Uuid::new_v4(),
      name:        input.name,
      reading:     input.reading,
      profile_url: input.profile_url,
      created_at:  Utc::now(),
    };

    let id_str  = encode_uuid(artist.artist_id);
    let name    = artist.name.clone();
    let reading = artist.reading.clone();
    let url     = artist.profile_url.clone();
    let at_str  = encode_dt(artist.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO artists (artist_id, name, reading, profile_url, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, name, reading, url, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(artist)
  }

  async fn get_artist(&self, id: Uuid) -> Result<Option<Artist>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawArtist> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT artist_id, name, reading, profile_url, created_at
             FROM artists WHERE artist_id = ?1",
            rusqlite::params![id_str],
            |row| {
              Ok(RawArtist {
                artist_id:   row.get(0)?,
                name:        row.get(1)?,
                reading:     row.get(2)?,
                profile_url: row.get(3)?,
                created_at:  row.get(4)?,
              })
            },
          )
          .optional()?)
      })
      .await?;

    raw.map(RawArtist::into_artist).transpose()
  }

  async fn list_artists(&self) -> Result<Vec<Artist>> {
    let raws: Vec<RawArtist> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT artist_id, name, reading, profile_url, created_at
           FROM artists ORDER BY created_at DESC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawArtist {
              artist_id:   row.get(0)?,
              name:        row.get(1)?,
              reading:     row.get(2)?,
              profile_url: row.get(3)?,
              created_at:  row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawArtist::into_artist).collect()
  }

  async fn add_song(&self, input: NewSong) -> Result<Song> {
    let song = Song {
      song_id:    Uuid::new_v4(),
      title:      input.title,
      artist_id:  input.artist_id,
      streaming:  input.streaming,
      created_at: Utc::now(),
    };

    let id_str     = encode_uuid(song.song_id);
    let title      = song.title.clone();
    let artist_str = song.artist_id.map(encode_uuid);
    let links_str  = encode_streaming(&song.streaming)?;
    let at_str     = encode_dt(song.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO songs (song_id, title, artist_id, streaming_json, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, title, artist_str, links_str, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(song)
  }

  async fn list_songs(&self) -> Result<Vec<Song>> {
    let raws: Vec<RawSong> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT song_id, title, artist_id, streaming_json, created_at
           FROM songs ORDER BY created_at DESC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawSong {
              song_id:        row.get(0)?,
              title:          row.get(1)?,
              artist_id:      row.get(2)?,
              streaming_json: row.get(3)?,
              created_at:     row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSong::into_song).collect()
  }

  async fn add_chant(&self, input: NewChant) -> Result<Chant> {
    let chant = Chant {
      chant_id:       Uuid::new_v4(),
      title:          input.title,
      content:        input.content,
      measures:       input.measures,
      reference_url:  input.reference_url,
      owner_id:       input.owner_id,
      bookmark_count: 0,
      created_at:     Utc::now(),
    };

    let id_str    = encode_uuid(chant.chant_id);
    let title     = chant.title.clone();
    let content   = chant.content.clone();
    let measures  = i64::from(chant.measures);
    let ref_url   = chant.reference_url.clone();
    let owner_str = chant.owner_id.map(encode_uuid);
    let at_str    = encode_dt(chant.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO chants
             (chant_id, title, content, measures, reference_url, owner_id, bookmark_count, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, ?7)",
          rusqlite::params![id_str, title, content, measures, ref_url, owner_str, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(chant)
  }

  async fn get_chant(&self, id: Uuid) -> Result<Option<Chant>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawChant> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT chant_id, title, content, measures, reference_url,
                    owner_id, bookmark_count, created_at
             FROM chants WHERE chant_id = ?1",
            rusqlite::params![id_str],
            |row| {
              Ok(RawChant {
                chant_id:       row.get(0)?,
                title:          row.get(1)?,
                content:        row.get(2)?,
                measures:       row.get(3)?,
                reference_url:  row.get(4)?,
                owner_id:       row.get(5)?,
                bookmark_count: row.get(6)?,
                created_at:     row.get(7)?,
              })
            },
          )
          .optional()?)
      })
      .await?;

    raw.map(RawChant::into_chant).transpose()
  }

  async fn adjust_chant_bookmarks(&self, id: Uuid, delta: i64) -> Result<()> {
    let id_str = encode_uuid(id);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE chants
           SET bookmark_count = MAX(0, bookmark_count + ?2)
           WHERE chant_id = ?1",
          rusqlite::params![id_str, delta],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn add_reply(&self, input: NewReply) -> Result<Reply> {
    let reply = Reply {
      reply_id:   Uuid::new_v4(),
      content:    input.content,
      category:   input.category,
      response:   input.response,
      created_at: Utc::now(),
    };

    let id_str   = encode_uuid(reply.reply_id);
    let content  = reply.content.clone();
    let cat_str  = encode_inquiry_category(reply.category).to_owned();
    let response = reply.response.clone();
    let at_str   = encode_dt(reply.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO replies (reply_id, content, category, response, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, content, cat_str, response, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(reply)
  }

  async fn list_replies(&self) -> Result<Vec<Reply>> {
    let raws: Vec<RawReply> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT reply_id, content, category, response, created_at
           FROM replies ORDER BY created_at DESC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawReply {
              reply_id:   row.get(0)?,
              content:    row.get(1)?,
              category:   row.get(2)?,
              response:   row.get(3)?,
              created_at: row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawReply::into_reply).collect()
  }

  // ── Call charts ───────────────────────────────────────────────────────────

  async fn add_chart(&self, input: NewChart) -> Result<CallChart> {
    let chart = CallChart {
      chart_id:   Uuid::new_v4(),
      title:      input.title,
      song_id:    input.song_id,
      owner_id:   input.owner_id,
      status:     PublishStatus::Approved,
      created_at: Utc::now(),
    };

    let chart_id_str = encode_uuid(chart.chart_id);
    let title        = chart.title.clone();
    let song_str     = chart.song_id.map(encode_uuid);
    let owner_str    = encode_uuid(chart.owner_id);
    let status_str   = encode_publish_status(chart.status).to_owned();
    let at_str       = encode_dt(chart.created_at);

    // (section_id, position, location, content, chant_id)
    let section_rows: Vec<(String, i64, String, String, Option<String>)> =
      input
        .sections
        .into_iter()
        .enumerate()
        .map(|(i, s)| {
          (
            encode_uuid(Uuid::new_v4()),
            i as i64,
            s.location,
            s.content,
            s.chant_id.map(encode_uuid),
          )
        })
        .collect();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO call_charts (chart_id, title, song_id, owner_id, status, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![chart_id_str, title, song_str, owner_str, status_str, at_str],
        )?;

        for (section_id, position, location, content, chant_id) in &section_rows {
          conn.execute(
            "INSERT INTO sections (section_id, chart_id, position, location, content, chant_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![section_id, chart_id_str, position, location, content, chant_id],
          )?;
        }
        Ok(())
      })
      .await?;

    Ok(chart)
  }

  async fn get_chart(&self, id: Uuid) -> Result<Option<ChartView>> {
    let id_str = encode_uuid(id);

    let raw: Option<(RawChart, Vec<RawSection>)> = self
      .conn
      .call(move |conn| {
        let chart = conn
          .query_row(
            "SELECT chart_id, title, song_id, owner_id, status, created_at
             FROM call_charts WHERE chart_id = ?1",
            rusqlite::params![id_str],
            |row| {
              Ok(RawChart {
                chart_id:   row.get(0)?,
                title:      row.get(1)?,
                song_id:    row.get(2)?,
                owner_id:   row.get(3)?,
                status:     row.get(4)?,
                created_at: row.get(5)?,
              })
            },
          )
          .optional()?;

        let Some(chart) = chart else {
          return Ok(None);
        };

        let mut stmt = conn.prepare(
          "SELECT section_id, chart_id, position, location, content, chant_id
           FROM sections WHERE chart_id = ?1 ORDER BY position",
        )?;
        let sections = stmt
          .query_map(rusqlite::params![id_str], |row| {
            Ok(RawSection {
              section_id: row.get(0)?,
              chart_id:   row.get(1)?,
              position:   row.get(2)?,
              location:   row.get(3)?,
              content:    row.get(4)?,
              chant_id:   row.get(5)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(Some((chart, sections)))
      })
      .await?;

    let Some((raw_chart, raw_sections)) = raw else {
      return Ok(None);
    };

    Ok(Some(ChartView {
      chart:    raw_chart.into_chart()?,
      sections: raw_sections
        .into_iter()
        .map(RawSection::into_section)
        .collect::<Result<_>>()?,
    }))
  }

  // ── Bulletin posts ────────────────────────────────────────────────────────

  async fn add_post(&self, input: NewBulletinPost) -> Result<BulletinPost> {
    let post = BulletinPost {
      post_id:    Uuid::new_v4(),
      title:      input.title,
      body:       input.body,
      event_date: input.event_date,
      url:        input.url,
      owner_id:   input.owner_id,
      status:     PublishStatus::Pending,
      created_at: Utc::now(),
    };

    let id_str    = encode_uuid(post.post_id);
    let title     = post.title.clone();
    let body      = post.body.clone();
    let date_str  = post.event_date.map(encode_date);
    let url       = post.url.clone();
    let owner_str = post.owner_id.map(encode_uuid);
    let at_str    = encode_dt(post.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO bulletin_posts
             (post_id, title, body, event_date, url, owner_id, status, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, 'pending', ?7)",
          rusqlite::params![id_str, title, body, date_str, url, owner_str, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(post)
  }

  async fn get_post(&self, id: Uuid) -> Result<Option<BulletinPost>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawPost> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT post_id, title, body, event_date, url, owner_id, status, created_at
             FROM bulletin_posts WHERE post_id = ?1",
            rusqlite::params![id_str],
            |row| {
              Ok(RawPost {
                post_id:    row.get(0)?,
                title:      row.get(1)?,
                body:       row.get(2)?,
                event_date: row.get(3)?,
                url:        row.get(4)?,
                owner_id:   row.get(5)?,
                status:     row.get(6)?,
                created_at: row.get(7)?,
              })
            },
          )
          .optional()?)
      })
      .await?;

    raw.map(RawPost::into_post).transpose()
  }

  async fn list_posts(
    &self,
    status: Option<PublishStatus>,
  ) -> Result<Vec<BulletinPost>> {
    let status_str = status.map(encode_publish_status).map(str::to_owned);

    let raws: Vec<RawPost> = self
      .conn
      .call(move |conn| {
        let map_row = |row: &rusqlite::Row<'_>| {
          Ok(RawPost {
            post_id:    row.get(0)?,
            title:      row.get(1)?,
            body:       row.get(2)?,
            event_date: row.get(3)?,
            url:        row.get(4)?,
            owner_id:   row.get(5)?,
            status:     row.get(6)?,
            created_at: row.get(7)?,
          })
        };

        let rows = if let Some(s) = status_str {
          let mut stmt = conn.prepare(
            "SELECT post_id, title, body, event_date, url, owner_id, status, created_at
             FROM bulletin_posts WHERE status = ?1 ORDER BY created_at DESC",
          )?;
          stmt
            .query_map(rusqlite::params![s], map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        } else {
          let mut stmt = conn.prepare(
            "SELECT post_id, title, body, event_date, url, owner_id, status, created_at
             FROM bulletin_posts ORDER BY created_at DESC",
          )?;
          stmt
            .query_map([], map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPost::into_post).collect()
  }

  async fn set_post_status(&self, id: Uuid, status: PublishStatus) -> Result<()> {
    let id_str     = encode_uuid(id);
    let status_str = encode_publish_status(status).to_owned();

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE bulletin_posts SET status = ?2 WHERE post_id = ?1",
          rusqlite::params![id_str, status_str],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::PostNotFound(id));
    }
    Ok(())
  }

  async fn delete_post(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "DELETE FROM bulletin_posts WHERE post_id = ?1",
          rusqlite::params![id_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Reports ───────────────────────────────────────────────────────────────

  async fn add_report(&self, input: NewReport) -> Result<Report> {
    let report = Report {
      report_id:   Uuid::new_v4(),
      target:      input.target,
      category:    input.category,
      reason:      input.reason,
      details:     input.details,
      reporter_id: input.reporter_id,
      status:      ReportStatus::Pending,
      created_at:  Utc::now(),
    };

    let id_str       = encode_uuid(report.report_id);
    let tkind_str    = encode_target_kind(report.target.kind).to_owned();
    let tid_str      = encode_uuid(report.target.id);
    let cat_str      = encode_report_category(report.category).to_owned();
    let reason       = report.reason.clone();
    let details      = report.details.clone();
    let reporter_str = report.reporter_id.map(encode_uuid);
    let at_str       = encode_dt(report.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO reports
             (report_id, target_kind, target_id, category, reason, details, reporter_id, status, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 'pending', ?8)",
          rusqlite::params![
            id_str, tkind_str, tid_str, cat_str, reason, details, reporter_str, at_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(report)
  }

  async fn get_report(&self, id: Uuid) -> Result<Option<Report>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawReport> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT report_id, target_kind, target_id, category, reason,
                    details, reporter_id, status, created_at
             FROM reports WHERE report_id = ?1",
            rusqlite::params![id_str],
            |row| {
              Ok(RawReport {
                report_id:   row.get(0)?,
                target_kind: row.get(1)?,
                target_id:   row.get(2)?,
                category:    row.get(3)?,
                reason:      row.get(4)?,
                details:     row.get(5)?,
                reporter_id: row.get(6)?,
                status:      row.get(7)?,
                created_at:  row.get(8)?,
              })
            },
          )
          .optional()?)
      })
      .await?;

    raw.map(RawReport::into_report).transpose()
  }

  async fn list_reports(
    &self,
    status: Option<ReportStatus>,
  ) -> Result<Vec<Report>> {
    let status_str = status.map(encode_report_status).map(str::to_owned);

    let raws: Vec<RawReport> = self
      .conn
      .call(move |conn| {
        let map_row = |row: &rusqlite::Row<'_>| {
          Ok(RawReport {
            report_id:   row.get(0)?,
            target_kind: row.get(1)?,
            target_id:   row.get(2)?,
            category:    row.get(3)?,
            reason:      row.get(4)?,
            details:     row.get(5)?,
            reporter_id: row.get(6)?,
            status:      row.get(7)?,
            created_at:  row.get(8)?,
          })
        };

        let rows = match status_str.as_deref() {
          // Legacy rows carry NULL for pending.
          Some("pending") => {
            let mut stmt = conn.prepare(
              "SELECT report_id, target_kind, target_id, category, reason,
                      details, reporter_id, status, created_at
               FROM reports WHERE status IS NULL OR status = 'pending'
               ORDER BY created_at DESC",
            )?;
            stmt
              .query_map([], map_row)?
              .collect::<rusqlite::Result<Vec<_>>>()?
          }
          Some(s) => {
            let mut stmt = conn.prepare(
              "SELECT report_id, target_kind, target_id, category, reason,
                      details, reporter_id, status, created_at
               FROM reports WHERE status = ?1 ORDER BY created_at DESC",
            )?;
            stmt
              .query_map(rusqlite::params![s], map_row)?
              .collect::<rusqlite::Result<Vec<_>>>()?
          }
          None => {
            let mut stmt = conn.prepare(
              "SELECT report_id, target_kind, target_id, category, reason,
                      details, reporter_id, status, created_at
               FROM reports ORDER BY created_at DESC",
            )?;
            stmt
              .query_map([], map_row)?
              .collect::<rusqlite::Result<Vec<_>>>()?
          }
        };
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawReport::into_report).collect()
  }

  async fn set_report_status(&self, id: Uuid, status: ReportStatus) -> Result<()> {
    let id_str     = encode_uuid(id);
    let status_str = encode_report_status(status).to_owned();

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE reports SET status = ?2 WHERE report_id = ?1",
          rusqlite::params![id_str, status_str],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::ReportNotFound(id));
    }
    Ok(())
  }

  // ── Bookmarks ─────────────────────────────────────────────────────────────

  async fn get_bookmark(
    &self,
    user_id: Uuid,
    target: ContentTarget,
  ) -> Result<Option<Bookmark>> {
    let user_str  = encode_uuid(user_id);
    let tkind_str = encode_target_kind(target.kind).to_owned();
    let tid_str   = encode_uuid(target.id);

    let raw: Option<RawBookmark> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT user_id, target_kind, target_id, category, created_at
             FROM bookmarks
             WHERE user_id = ?1 AND target_kind = ?2 AND target_id = ?3",
            rusqlite::params![user_str, tkind_str, tid_str],
            |row| {
              Ok(RawBookmark {
                user_id:     row.get(0)?,
                target_kind: row.get(1)?,
                target_id:   row.get(2)?,
                category:    row.get(3)?,
                created_at:  row.get(4)?,
              })
            },
          )
          .optional()?)
      })
      .await?;

    raw.map(RawBookmark::into_bookmark).transpose()
  }

  async fn list_bookmarks(
    &self,
    user_id: Uuid,
    category: Option<BookmarkCategory>,
  ) -> Result<Vec<Bookmark>> {
    let user_str = encode_uuid(user_id);
    let cat_str  = category.map(encode_bookmark_category).map(str::to_owned);

    let raws: Vec<RawBookmark> = self
      .conn
      .call(move |conn| {
        let map_row = |row: &rusqlite::Row<'_>| {
          Ok(RawBookmark {
            user_id:     row.get(0)?,
            target_kind: row.get(1)?,
            target_id:   row.get(2)?,
            category:    row.get(3)?,
            created_at:  row.get(4)?,
          })
        };

        let rows = if let Some(c) = cat_str {
          let mut stmt = conn.prepare(
            "SELECT user_id, target_kind, target_id, category, created_at
             FROM bookmarks WHERE user_id = ?1 AND category = ?2
             ORDER BY created_at DESC",
          )?;
          stmt
            .query_map(rusqlite::params![user_str, c], map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        } else {
          let mut stmt = conn.prepare(
            "SELECT user_id, target_kind, target_id, category, created_at
             FROM bookmarks WHERE user_id = ?1 ORDER BY created_at DESC",
          )?;
          stmt
            .query_map(rusqlite::params![user_str], map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawBookmark::into_bookmark).collect()
  }

  async fn add_bookmark(
    &self,
    user_id: Uuid,
    target: ContentTarget,
    category: BookmarkCategory,
  ) -> Result<BookmarkWrite> {
    let bookmark = Bookmark {
      user_id,
      target,
      category,
      created_at: Utc::now(),
    };

    let user_str  = encode_uuid(user_id);
    let tkind_str = encode_target_kind(target.kind).to_owned();
    let tid_str   = encode_uuid(target.id);
    let cat_str   = encode_bookmark_category(category).to_owned();
    let at_str    = encode_dt(bookmark.created_at);

    let created = self
      .conn
      .call(move |conn| {
        let res = conn.execute(
          "INSERT INTO bookmarks (user_id, target_kind, target_id, category, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![user_str, tkind_str, tid_str, cat_str, at_str],
        );
        match res {
          Ok(_) => Ok(true),
          // The UNIQUE(user_id, target_kind, target_id) constraint fired:
          // a row already exists for this pair.
          Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
          {
            Ok(false)
          }
          Err(e) => Err(e.into()),
        }
      })
      .await?;

    if created {
      Ok(BookmarkWrite::Created(bookmark))
    } else {
      Ok(BookmarkWrite::Duplicate)
    }
  }

  async fn set_bookmark_category(
    &self,
    user_id: Uuid,
    target: ContentTarget,
    category: BookmarkCategory,
  ) -> Result<()> {
    let user_str  = encode_uuid(user_id);
    let tkind_str = encode_target_kind(target.kind).to_owned();
    let tid_str   = encode_uuid(target.id);
    let cat_str   = encode_bookmark_category(category).to_owned();

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE bookmarks SET category = ?4
           WHERE user_id = ?1 AND target_kind = ?2 AND target_id = ?3",
          rusqlite::params![user_str, tkind_str, tid_str, cat_str],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::BookmarkNotFound { user: user_id, target: target.id });
    }
    Ok(())
  }

  async fn delete_bookmark(
    &self,
    user_id: Uuid,
    target: ContentTarget,
  ) -> Result<()> {
    let user_str  = encode_uuid(user_id);
    let tkind_str = encode_target_kind(target.kind).to_owned();
    let tid_str   = encode_uuid(target.id);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "DELETE FROM bookmarks
           WHERE user_id = ?1 AND target_kind = ?2 AND target_id = ?3",
          rusqlite::params![user_str, tkind_str, tid_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
