use crate::commands::{CmdMessage, CmdResult};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::store::ContentStore;
use crate::venues::{Ship, Venue, VenuesDatabase};
use std::path::{Path, PathBuf};

fn db_path(config: &SiteConfig, root: &Path) -> PathBuf {
    root.join(&config.venues_db)
}

/// Load the database, or start an empty one if the file does not exist
/// yet. A file that exists but fails to parse is an error: the edit
/// aborts before anything is written.
fn load<S: ContentStore>(store: &S, path: &Path) -> Result<VenuesDatabase> {
    if !store.exists(path) {
        return Ok(VenuesDatabase::default());
    }
    VenuesDatabase::from_str(&store.read(path)?)
}

fn save<S: ContentStore>(store: &mut S, path: &Path, db: &VenuesDatabase) -> Result<()> {
    store.write(path, &db.to_string_pretty()?)
}

pub fn add_venue<S: ContentStore>(
    store: &mut S,
    config: &SiteConfig,
    root: &Path,
    venue: Venue,
) -> Result<CmdResult> {
    let path = db_path(config, root);
    let mut db = load(store, &path)?;

    let slug = venue.slug.clone();
    db.add_venue(venue)?;
    save(store, &path, &db)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Venue added: {}", slug)));
    Ok(result)
}

pub fn add_ship<S: ContentStore>(
    store: &mut S,
    config: &SiteConfig,
    root: &Path,
    slug: &str,
    ship: Ship,
) -> Result<CmdResult> {
    let path = db_path(config, root);
    let mut db = load(store, &path)?;

    let replacing = db.ships.contains_key(slug);
    db.upsert_ship(slug, ship)?;
    save(store, &path, &db)?;

    let mut result = CmdResult::default();
    if replacing {
        result.add_message(CmdMessage::success(format!("Ship replaced: {}", slug)));
    } else {
        result.add_message(CmdMessage::success(format!("Ship added: {}", slug)));
    }
    Ok(result)
}

pub fn check<S: ContentStore>(
    store: &S,
    config: &SiteConfig,
    root: &Path,
) -> Result<CmdResult> {
    let path = db_path(config, root);
    let mut result = CmdResult::default();

    if !store.exists(&path) {
        result.add_message(CmdMessage::warning(format!(
            "No venues database at {}",
            path.display()
        )));
        return Ok(result);
    }

    let db = VenuesDatabase::from_str(&store.read(&path)?)?;
    let report = db.check();

    for slug in &report.duplicate_slugs {
        result.add_message(CmdMessage::error(format!("Duplicate venue slug: {}", slug)));
    }
    for (ship, venue) in &report.dangling {
        result.add_message(CmdMessage::error(format!(
            "Ship {} references unknown venue: {}",
            ship, venue
        )));
    }
    if report.is_clean() {
        result.add_message(CmdMessage::success(format!(
            "Venues database is consistent ({} ships, {} venues)",
            db.ships.len(),
            db.venues.len()
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    const ROOT: &str = "/site";

    fn venue(slug: &str) -> Venue {
        Venue {
            slug: slug.to_string(),
            name: "X".to_string(),
            category: "bars".to_string(),
            description: None,
        }
    }

    fn read_db(store: &InMemoryStore) -> VenuesDatabase {
        let content = store.read(Path::new("/site/data/venues.json")).unwrap();
        VenuesDatabase::from_str(&content).unwrap()
    }

    #[test]
    fn add_venue_creates_database_on_first_use() {
        let mut fixture = StoreFixture::new();
        let config = SiteConfig::default();

        add_venue(&mut fixture.store, &config, Path::new(ROOT), venue("x")).unwrap();

        let db = read_db(&fixture.store);
        assert_eq!(db.venues.len(), 1);
        assert_eq!(db.venues[0].slug, "x");
    }

    #[test]
    fn add_ship_referencing_fresh_venue() {
        let mut fixture = StoreFixture::new();
        let config = SiteConfig::default();
        let root = Path::new(ROOT);

        add_venue(&mut fixture.store, &config, root, venue("x")).unwrap();
        let ship = Ship {
            name: "MS Horizon".to_string(),
            class: None,
            gross_tonnage: None,
            venues: vec!["x".to_string()],
        };
        add_ship(&mut fixture.store, &config, root, "newship", ship).unwrap();

        let db = read_db(&fixture.store);
        assert_eq!(db.ships["newship"].venues, vec!["x".to_string()]);
    }

    #[test]
    fn malformed_database_aborts_without_writing() {
        let mut fixture =
            StoreFixture::new().with_file("/site/data/venues.json", "{ broken json");
        let config = SiteConfig::default();

        let err = add_venue(&mut fixture.store, &config, Path::new(ROOT), venue("x"));
        assert!(err.is_err());

        // Original (broken) bytes untouched: nothing was written
        let content = fixture
            .store
            .read(Path::new("/site/data/venues.json"))
            .unwrap();
        assert_eq!(content, "{ broken json");
    }

    #[test]
    fn check_flags_dangling_reference() {
        let broken = r#"{
            "ships": { "horizon": { "name": "MS Horizon", "venues": ["ghost"] } },
            "venues": []
        }"#;
        let mut fixture = StoreFixture::new().with_file("/site/data/venues.json", broken);
        let config = SiteConfig::default();

        let result = check(&mut fixture.store, &config, Path::new(ROOT)).unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Error) && m.content.contains("ghost")));
    }
}
