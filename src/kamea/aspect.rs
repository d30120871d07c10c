//! The aspect table: a queryable cache of pre-computed astrological aspect
//! events, written in one atomic batch per year.
//!
//! This module treats the table purely as a cache: an absence of rows for
//! a given range is an answer, not a trigger to compute. Computing aspects
//! from raw planetary positions is delegated entirely to an external
//! collaborator.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Error, Result};

/// The full vocabulary of aspect kinds this table recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectKind {
    /// 0 degrees.
    Conjunction,
    /// 180 degrees.
    Opposition,
    /// 120 degrees.
    Trine,
    /// 90 degrees.
    Square,
    /// 60 degrees.
    Sextile,
    /// 30 degrees.
    Semisextile,
    /// 150 degrees.
    Quincunx,
    /// 45 degrees.
    Semisquare,
    /// 135 degrees.
    Sesquisquare,
    /// 72 degrees.
    Quintile,
    /// 144 degrees.
    Biquintile,
    /// ~51.4 degrees (360/7).
    Septile,
    /// 40 degrees (360/9).
    Novile,
    /// Same declination, same direction.
    Parallel,
    /// Same declination, opposite direction.
    Contraparallel,
}

impl AspectKind {
    /// The five classical major aspects: conjunction, opposition, trine,
    /// square, and sextile.
    #[must_use]
    pub const fn is_major(self) -> bool {
        matches!(
            self,
            Self::Conjunction | Self::Opposition | Self::Trine | Self::Square | Self::Sextile
        )
    }

    /// The string tag stored in the `aspect_type` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Opposition => "Opposition",
            Self::Trine => "Trine",
            Self::Square => "Square",
            Self::Sextile => "Sextile",
            Self::Semisextile => "Semisextile",
            Self::Quincunx => "Quincunx",
            Self::Semisquare => "Semisquare",
            Self::Sesquisquare => "Sesquisquare",
            Self::Quintile => "Quintile",
            Self::Biquintile => "Biquintile",
            Self::Septile => "Septile",
            Self::Novile => "Novile",
            Self::Parallel => "Parallel",
            Self::Contraparallel => "Contraparallel",
        }
    }

    /// Parses the string tag stored in the `aspect_type` column.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameters`] if `s` is not a recognized tag.
    pub fn from_str_tag(s: &str) -> Result<Self> {
        Ok(match s {
            "Conjunction" => Self::Conjunction,
            "Opposition" => Self::Opposition,
            "Trine" => Self::Trine,
            "Square" => Self::Square,
            "Sextile" => Self::Sextile,
            "Semisextile" => Self::Semisextile,
            "Quincunx" => Self::Quincunx,
            "Semisquare" => Self::Semisquare,
            "Sesquisquare" => Self::Sesquisquare,
            "Quintile" => Self::Quintile,
            "Biquintile" => Self::Biquintile,
            "Septile" => Self::Septile,
            "Novile" => Self::Novile,
            "Parallel" => Self::Parallel,
            "Contraparallel" => Self::Contraparallel,
            other => {
                return Err(Error::invalid_parameters(format!(
                    "unrecognized aspect kind tag {other:?}"
                )))
            }
        })
    }
}

/// A single pre-computed aspect event between two named celestial bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectRecord {
    /// Name of the first body, canonicalized so that `body_a <= body_b`
    /// lexicographically is not assumed by callers; canonical ordering by
    /// database id happens on insert.
    pub body_a: String,
    /// Name of the second body.
    pub body_b: String,
    /// The kind of aspect.
    pub kind: AspectKind,
    /// The exact moment the aspect occurred.
    pub exact_timestamp: DateTime<Utc>,
    /// Orb, in degrees, between the two bodies' exact aspect angle.
    pub orb: f64,
    /// Ecliptic longitude of `body_a` at `exact_timestamp`.
    pub longitude_a: f64,
    /// Ecliptic longitude of `body_b` at `exact_timestamp`.
    pub longitude_b: f64,
    /// Calendar year this aspect belongs to.
    pub year: i32,
}

/// A handle to the aspect table, owning a `rusqlite` connection.
///
/// The cores take this handle by dependency injection; they never create
/// or own their own database threads.
pub struct AspectStore {
    conn: Connection,
}

impl AspectStore {
    /// Opens (and, if necessary, creates) the aspect table schema against
    /// an existing `rusqlite` connection.
    ///
    /// # Errors
    /// Returns [`Error::Database`] if schema creation fails.
    pub fn new(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS celestial_bodies (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                type TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS aspects (
                id INTEGER PRIMARY KEY,
                body1_id INTEGER NOT NULL REFERENCES celestial_bodies(id),
                body2_id INTEGER NOT NULL REFERENCES celestial_bodies(id),
                aspect_type TEXT NOT NULL,
                is_major INTEGER NOT NULL,
                year INTEGER NOT NULL,
                exact_timestamp TEXT NOT NULL,
                exact_position1 REAL NOT NULL,
                exact_position2 REAL NOT NULL
            );
            CREATE TABLE IF NOT EXISTS calculation_metadata (
                start_year INTEGER NOT NULL,
                end_year INTEGER NOT NULL,
                calculation_timestamp TEXT NOT NULL,
                status TEXT NOT NULL,
                events_count INTEGER NOT NULL,
                PRIMARY KEY (start_year, end_year)
            );",
        )
        .map_err(|e| Error::database("creating aspect table schema", e))?;
        Ok(Self { conn })
    }

    fn body_id(conn: &Connection, name: &str) -> Result<i64> {
        let existing: Option<i64> = conn
            .query_row(
                "SELECT id FROM celestial_bodies WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| Error::database(format!("looking up celestial body {name:?}"), e))?;
        if let Some(id) = existing {
            return Ok(id);
        }
        conn.execute(
            "INSERT INTO celestial_bodies (name, type) VALUES (?1, 'planet')",
            params![name],
        )
        .map_err(|e| Error::database(format!("inserting celestial body {name:?}"), e))?;
        Ok(conn.last_insert_rowid())
    }

    /// Writes every aspect for `year` in a single transaction, along with
    /// the `(year, year)` calculation-metadata row. Either everything for
    /// `year` commits, or nothing does.
    ///
    /// # Errors
    /// Returns [`Error::TransactionFailed`] if the transaction rolls back,
    /// wrapping the underlying cause.
    pub fn store_year(&mut self, year: i32, aspects: &[AspectRecord]) -> Result<()> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| Error::database("starting aspect-year transaction", e))?;

        let run = || -> Result<()> {
            for aspect in aspects {
                let mut id_a = Self::body_id(&tx, &aspect.body_a)?;
                let mut id_b = Self::body_id(&tx, &aspect.body_b)?;
                let (mut pos_a, mut pos_b) = (aspect.longitude_a, aspect.longitude_b);
                if id_a > id_b {
                    std::mem::swap(&mut id_a, &mut id_b);
                    std::mem::swap(&mut pos_a, &mut pos_b);
                }
                tx.execute(
                    "INSERT OR REPLACE INTO aspects (
                        body1_id, body2_id, aspect_type, is_major, year,
                        exact_timestamp, exact_position1, exact_position2
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                    params![
                        id_a,
                        id_b,
                        aspect.kind.as_str(),
                        i64::from(aspect.kind.is_major()),
                        aspect.year,
                        aspect.exact_timestamp.to_rfc3339(),
                        pos_a,
                        pos_b,
                    ],
                )
                .map_err(|e| Error::database("inserting aspect row", e))?;
            }
            tx.execute(
                "INSERT OR REPLACE INTO calculation_metadata (
                    start_year, end_year, calculation_timestamp, status, events_count
                ) VALUES (?1, ?1, ?2, 'completed', ?3)",
                params![year, Utc::now().to_rfc3339(), aspects.len()],
            )
            .map_err(|e| Error::database("updating calculation metadata", e))?;
            Ok(())
        };

        match run() {
            Ok(()) => {
                tx.commit()
                    .map_err(|e| Error::database("committing aspect-year transaction", e))?;
                log::debug!("committed {} aspects for year {year}", aspects.len());
                Ok(())
            }
            Err(e) => {
                log::warn!("aspect batch for year {year} rolled back: {e}");
                Err(Error::transaction_failed(format!(
                    "aspect batch for year {year} rolled back: {e}"
                )))
            }
        }
    }

    /// Queries aspects in `[start, end]`, optionally filtered by body name
    /// (matching in either `body1`/`body2` order) and aspect kind.
    ///
    /// # Errors
    /// Returns [`Error::Database`] if the query fails.
    #[allow(
        clippy::too_many_arguments,
        reason = "mirrors the query contract's five-field filter directly"
    )]
    pub fn query(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        body1: Option<&str>,
        body2: Option<&str>,
        kind: Option<AspectKind>,
    ) -> Result<Vec<AspectRecord>> {
        let sql = "SELECT cb1.name, cb2.name, a.aspect_type, a.exact_timestamp,
                    a.exact_position1, a.exact_position2, a.year
             FROM aspects a
             JOIN celestial_bodies cb1 ON cb1.id = a.body1_id
             JOIN celestial_bodies cb2 ON cb2.id = a.body2_id
             WHERE a.exact_timestamp BETWEEN ?1 AND ?2
               AND (?3 = '' OR a.aspect_type = ?3)
               AND (
                   (?4 = '' AND ?5 = '')
                   OR cb1.name = ?4 OR cb1.name = ?5
                   OR cb2.name = ?4 OR cb2.name = ?5
               )";

        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| Error::database("preparing aspect query", e))?;
        let kind_tag = kind.map(AspectKind::as_str).unwrap_or_default();
        let body1_filter = body1.unwrap_or_default();
        let body2_filter = body2.unwrap_or_default();

        let rows = stmt
            .query_map(
                params![
                    start.to_rfc3339(),
                    end.to_rfc3339(),
                    kind_tag,
                    body1_filter,
                    body2_filter,
                ],
                |row| {
                    let body_a: String = row.get(0)?;
                    let body_b: String = row.get(1)?;
                    let kind_tag: String = row.get(2)?;
                    let timestamp: String = row.get(3)?;
                    let longitude_a: f64 = row.get(4)?;
                    let longitude_b: f64 = row.get(5)?;
                    let year: i32 = row.get(6)?;
                    Ok((body_a, body_b, kind_tag, timestamp, longitude_a, longitude_b, year))
                },
            )
            .map_err(|e| Error::database("executing aspect query", e))?;

        let mut records = Vec::new();
        for row in rows {
            let (body_a, body_b, kind_tag, timestamp, longitude_a, longitude_b, year) =
                row.map_err(|e| Error::database("reading aspect query row", e))?;
            let kind = AspectKind::from_str_tag(&kind_tag)?;
            let exact_timestamp = DateTime::parse_from_rfc3339(&timestamp)
                .map_err(|e| Error::integrity(format!("malformed stored timestamp {timestamp:?}: {e}")))?
                .with_timezone(&Utc);
            records.push(AspectRecord {
                body_a,
                body_b,
                kind,
                exact_timestamp,
                orb: 0.0,
                longitude_a,
                longitude_b,
                year,
            });
        }
        if records.is_empty() {
            log::warn!("aspect query for [{start}, {end}] returned zero rows");
        }
        Ok(records)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test code uses unwrap for conciseness")]
#[allow(
    clippy::indexing_slicing,
    reason = "test assertions index query results whose length is asserted first"
)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_aspect() -> AspectRecord {
        AspectRecord {
            body_a: "Sun".to_string(),
            body_b: "Moon".to_string(),
            kind: AspectKind::Trine,
            exact_timestamp: Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap(),
            orb: 0.5,
            longitude_a: 120.0,
            longitude_b: 0.0,
            year: 2026,
        }
    }

    #[test]
    fn is_major_matches_spec_vocabulary() {
        assert!(AspectKind::Conjunction.is_major());
        assert!(AspectKind::Sextile.is_major());
        assert!(!AspectKind::Quincunx.is_major());
        assert!(!AspectKind::Novile.is_major());
    }

    #[test]
    fn store_and_query_round_trip() {
        let conn = Connection::open_in_memory().unwrap();
        let mut store = AspectStore::new(conn).unwrap();
        store.store_year(2026, &[sample_aspect()]).unwrap();

        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap();
        let results = store.query(start, end, None, None, None).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, AspectKind::Trine);
    }

    #[test]
    fn query_filters_by_kind() {
        let conn = Connection::open_in_memory().unwrap();
        let mut store = AspectStore::new(conn).unwrap();
        store.store_year(2026, &[sample_aspect()]).unwrap();

        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap();
        let results = store
            .query(start, end, None, None, Some(AspectKind::Square))
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn aspect_kind_round_trips_through_string_tag() {
        for kind in [
            AspectKind::Conjunction,
            AspectKind::Opposition,
            AspectKind::Septile,
            AspectKind::Contraparallel,
        ] {
            assert_eq!(AspectKind::from_str_tag(kind.as_str()).unwrap(), kind);
        }
    }
}
