//! End-to-end game flow through the public API.

use line_core::{
    Category, DecrementPolicy, Game, GameConfig, LineError, RatioPolicy, Score, SeedPlayer,
    TeamSide,
};

const CONFIG: &str = r#"
home_name: Disco Fever
away_name: Team 2
ratio_policy: ABBA
roster:
  - { name: Rhezie, category: W }
  - { name: Randy, category: O }
  - { name: Evan, category: O }
  - { name: Jen, category: W }
  - { name: Laura, category: W }
  - { name: Nathan, category: O }
  - { name: Sam, category: O }
  - { name: Danielle, category: W }
  - { name: Jordan, category: O }
  - { name: Haley, category: W }
"#;

fn game() -> Game {
    Game::new(GameConfig::from_yaml_str(CONFIG).unwrap()).unwrap()
}

#[test]
fn test_opening_lines_follow_seed_order() {
    let game = game();
    assert_eq!(
        game.current_line().names(),
        ["Randy", "Evan", "Nathan", "Sam", "Rhezie", "Jen", "Laura"]
    );
    assert_eq!(
        game.next_line().names(),
        ["Jordan", "Randy", "Evan", "Danielle", "Haley", "Rhezie", "Jen"]
    );
}

#[test]
fn test_scoring_undo_and_roster_edit_mid_game() {
    let mut game = game();

    game.on_score_increment(TeamSide::Home);
    game.on_score_increment(TeamSide::Away);
    assert_eq!(game.score(), Score { home: 1, away: 1 });
    assert_eq!(game.rotation_state().point_number, 3);

    // Late arrival is called on the very next line
    let nathalie = game.add_player("Nathalie", Category::Women).unwrap();
    assert_eq!(nathalie.number, 6);
    let line = game.current_line();
    assert_eq!(line.players.iter().filter(|p| p.id == nathalie.id).count(), 1);
    assert!(game.engine().is_consistent_with(game.roster()));

    assert_eq!(game.on_undo().unwrap(), TeamSide::Away);
    assert_eq!(game.score(), Score { home: 1, away: 0 });
    assert_eq!(game.rotation_state().line_index, 1);
    assert!(game.roster().contains(nathalie.id));

    assert_eq!(game.on_undo().unwrap(), TeamSide::Home);
    assert!(matches!(game.on_undo(), Err(LineError::NoHistory)));
    assert_eq!(game.score(), Score::default());
}

#[test]
fn test_every_player_plays_in_a_long_game() {
    let mut game = game();
    let mut played = std::collections::HashSet::new();
    for point in 0..12 {
        for player in game.current_line().players {
            played.insert(player.id);
        }
        let side = if point % 3 == 0 { TeamSide::Away } else { TeamSide::Home };
        game.on_score_increment(side);
    }
    assert_eq!(played.len(), game.roster().len());
    assert_eq!(game.history().len(), 12);
    assert_eq!(game.score().home + game.score().away, 12);
}

#[test]
fn test_reset_restores_seed_and_keeps_settings() {
    let mut game = game();
    game.set_ratio_policy(RatioPolicy::FourThree);
    game.on_score_increment(TeamSide::Home);
    let randy = game.roster().players_by_category(Category::Open)[0].id;
    game.remove_player(randy).unwrap();

    game.on_reset();
    assert_eq!(game.roster().len(), 10);
    assert_eq!(game.ratio_policy(), RatioPolicy::FourThree);
    assert_eq!(game.current_line().names()[0], "Randy");
    assert!(game.history().is_empty());
}

#[test]
fn test_rewind_if_latest_policy_from_config() {
    let mut config = GameConfig::from_yaml_str(CONFIG).unwrap();
    config.decrement_policy = DecrementPolicy::RewindIfLatest;
    let mut game = Game::new(config).unwrap();

    game.on_score_increment(TeamSide::Home);
    assert_eq!(game.on_score_decrement_direct(TeamSide::Home), 0);
    assert_eq!(game.rotation_state().line_index, 0);
    assert!(game.history().is_empty());
}

#[test]
fn test_tiny_roster_degrades_gracefully() {
    let roster = vec![SeedPlayer::new("Solo", Category::Open)];
    let mut game = Game::new(GameConfig::default().with_roster(roster)).unwrap();
    for _ in 0..5 {
        let line = game.current_line();
        assert_eq!(line.names(), ["Solo"]);
        assert!(line.is_short());
        game.on_score_increment(TeamSide::Home);
    }
}
