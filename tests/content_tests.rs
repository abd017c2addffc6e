//! Content collection tests: catalog filtering semantics, required-field
//! validation and id-keyed updates/deletes.

use studiosite::content::{
    ArticleDraft, GameCatalog, GameDraft, NewsDesk, StudioContent, TeamMemberDraft, TeamRoster,
};

#[test]
fn catalog_search_is_case_insensitive_over_title_and_description() {
    let games = GameCatalog::seeded();

    let hits = games.filter(Some("CYBER"), None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Cyber Legends");

    // "course" only appears in the Racing Thunder description.
    let hits = games.filter(Some("course"), None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Racing Thunder");

    assert!(games.filter(Some("no such game"), None).is_empty());
}

#[test]
fn catalog_category_chip_matches_against_technologies() {
    let games = GameCatalog::seeded();

    // `Tous` (and no category at all) passes everything.
    assert_eq!(games.filter(None, None).len(), 6);
    assert_eq!(games.filter(None, Some("Tous")).len(), 6);

    // Only Space Odyssey lists a VR technology.
    let hits = games.filter(None, Some("VR"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Space Odyssey");

    // Search and category combine.
    assert!(games.filter(Some("cyber"), Some("VR")).is_empty());
}

#[test]
fn game_create_requires_title_and_description() {
    let games = GameCatalog::seeded();
    let before = games.len();

    let err = games
        .add(GameDraft { title: "Sans description".into(), ..Default::default() })
        .unwrap_err();
    assert_eq!(err.http_status(), 400);
    assert_eq!(games.len(), before);

    let game = games
        .add(GameDraft {
            title: "Shadow Keep".into(),
            description: "Infiltration médiévale".into(),
            technologies: vec!["Godot".into()],
            ..Default::default()
        })
        .unwrap();
    assert_eq!(games.len(), before + 1);
    assert!(!game.id.is_empty());
}

#[test]
fn game_delete_removes_exactly_that_id() {
    let games = GameCatalog::seeded();
    let before = games.len();

    games.remove("3").unwrap();
    let remaining = games.list();
    assert_eq!(remaining.len(), before - 1);
    assert!(remaining.iter().all(|g| g.id != "3"));

    // Unknown id: reported not-found, collection untouched.
    let err = games.remove("3").unwrap_err();
    assert_eq!(err.http_status(), 404);
    assert_eq!(games.len(), before - 1);
}

#[test]
fn game_update_replaces_the_entry_in_place() {
    let games = GameCatalog::seeded();
    let updated = games
        .update(
            "2",
            GameDraft {
                title: "Mystic Realms II".into(),
                description: "La suite".into(),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.id, "2");
    assert_eq!(updated.title, "Mystic Realms II");

    let err = games.update("999", GameDraft { title: "t".into(), description: "d".into(), ..Default::default() }).unwrap_err();
    assert_eq!(err.http_status(), 404);
}

#[test]
fn newsroom_search_covers_title_and_excerpt() {
    let news = NewsDesk::seeded();

    let hits = news.search(Some("mystic"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Mise à jour majeure pour Mystic Realms");

    assert_eq!(news.search(None).len(), 6);
}

#[test]
fn article_publication_stamps_date_and_default_byline() {
    let news = NewsDesk::seeded();

    let err = news.add(ArticleDraft { title: "Titre seul".into(), ..Default::default() }).unwrap_err();
    assert_eq!(err.http_status(), 400);

    let article = news
        .add(ArticleDraft {
            title: "Nouvelle recrue".into(),
            excerpt: "Bienvenue à notre nouveau développeur.".into(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(article.author, "Admin");
    assert_eq!(article.category, "Actualités");
    // YYYY-MM-DD stamp
    assert_eq!(article.published_at.len(), 10);
}

#[test]
fn roster_requires_name_and_role() {
    let team = TeamRoster::seeded();
    let before = team.len();

    let err = team.add(TeamMemberDraft { name: "Sans rôle".into(), ..Default::default() }).unwrap_err();
    assert_eq!(err.http_status(), 400);
    assert_eq!(team.len(), before);

    team.add(TeamMemberDraft {
        name: "Lucie Bernard".into(),
        role: "Sound Designer".into(),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(team.len(), before + 1);

    team.remove("1").unwrap();
    assert!(team.list().iter().all(|m| m.id != "1"));
}

#[test]
fn generated_ids_are_timestamp_based() {
    let content = StudioContent::seeded();
    let game = content
        .games
        .add(GameDraft { title: "t".into(), description: "d".into(), ..Default::default() })
        .unwrap();
    // Millisecond timestamps parse as integers well above the seeded ids.
    let id: i64 = game.id.parse().unwrap();
    assert!(id > 1_000_000_000_000);
}
