//! Integration tests for round generation: group sizes, distinctness, and the
//! Mexicano cross-pairing in the ranking phase.

use padel_tournament_web::{
    generate_round_matches, Player, PlayerId, TournamentConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn players(n: usize) -> Vec<Player> {
    (0..n).map(|i| Player::new(format!("P{i}"))).collect()
}

fn all_ids(matches: &[padel_tournament_web::GameMatch]) -> Vec<PlayerId> {
    matches
        .iter()
        .flat_map(|m| m.team_1.iter().chain(m.team_2.iter()).copied())
        .collect()
}

#[test]
fn fewer_than_four_players_means_no_matches() {
    let config = TournamentConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    for n in 0..4 {
        let matches = generate_round_matches(&players(n), 1, &config, &mut rng);
        assert!(matches.is_empty(), "expected no matches for {n} players");
    }
}

#[test]
fn produces_floor_n_over_4_matches_with_distinct_players() {
    let config = TournamentConfig::default();
    let mut rng = StdRng::seed_from_u64(2);
    for n in [4usize, 7, 8, 10, 13, 16] {
        let roster = players(n);
        let matches = generate_round_matches(&roster, 1, &config, &mut rng);
        assert_eq!(matches.len(), n / 4, "match count for {n} players");

        // Each player appears at most once per round
        let ids = all_ids(&matches);
        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len(), "player repeated in round of {n}");
        assert_eq!(ids.len(), (n / 4) * 4);
    }
}

#[test]
fn exact_multiple_of_four_drops_nobody() {
    let config = TournamentConfig::default();
    let mut rng = StdRng::seed_from_u64(3);
    let roster = players(8);
    let matches = generate_round_matches(&roster, 1, &config, &mut rng);
    let ids: HashSet<_> = all_ids(&matches).into_iter().collect();
    for p in &roster {
        assert!(ids.contains(&p.id), "{} was dropped", p.name);
    }
}

#[test]
fn courts_are_assigned_sequentially_from_one() {
    let config = TournamentConfig::default();
    let mut rng = StdRng::seed_from_u64(4);
    let matches = generate_round_matches(&players(13), 1, &config, &mut rng);
    let courts: Vec<u32> = matches.iter().map(|m| m.court).collect();
    assert_eq!(courts, vec![1, 2, 3]);
}

#[test]
fn every_generated_match_starts_at_zero_zero() {
    let config = TournamentConfig::default();
    let mut rng = StdRng::seed_from_u64(5);
    for m in generate_round_matches(&players(8), 1, &config, &mut rng) {
        assert_eq!((m.team_1_score, m.team_2_score), (0, 0));
    }
}

#[test]
fn ranking_phase_pairs_first_with_fourth_second_with_third() {
    let config = TournamentConfig::default(); // rounds_before_ranking = 2
    let mut roster = players(4);
    // Distinct win counts give an unambiguous order: P0 > P1 > P2 > P3
    for (i, p) in roster.iter_mut().enumerate() {
        p.wins = (4 - i) as u32;
        p.points = f64::from(p.wins);
    }

    let mut rng = StdRng::seed_from_u64(6);
    let matches = generate_round_matches(&roster, 3, &config, &mut rng);
    assert_eq!(matches.len(), 1);

    let m = &matches[0];
    let team_1: HashSet<_> = m.team_1.iter().copied().collect();
    let team_2: HashSet<_> = m.team_2.iter().copied().collect();
    assert_eq!(team_1, HashSet::from([roster[0].id, roster[3].id]));
    assert_eq!(team_2, HashSet::from([roster[1].id, roster[2].id]));
}

#[test]
fn ranking_phase_is_deterministic_across_rngs() {
    let config = TournamentConfig::default();
    let mut roster = players(8);
    for (i, p) in roster.iter_mut().enumerate() {
        p.wins = (8 - i) as u32;
        p.points = f64::from(p.wins);
    }

    let a = generate_round_matches(&roster, 3, &config, &mut StdRng::seed_from_u64(7));
    let b = generate_round_matches(&roster, 3, &config, &mut StdRng::seed_from_u64(99));
    let teams = |ms: &[padel_tournament_web::GameMatch]| {
        ms.iter().map(|m| (m.team_1, m.team_2)).collect::<Vec<_>>()
    };
    assert_eq!(teams(&a), teams(&b));
}

#[test]
fn ranking_phase_splits_roster_into_independent_groups_of_four() {
    let config = TournamentConfig::default();
    let mut roster = players(8);
    for (i, p) in roster.iter_mut().enumerate() {
        p.wins = (8 - i) as u32;
        p.points = f64::from(p.wins);
    }

    let mut rng = StdRng::seed_from_u64(8);
    let matches = generate_round_matches(&roster, 3, &config, &mut rng);
    assert_eq!(matches.len(), 2);

    // Top four on court 1: 1st+4th vs 2nd+3rd
    let m = &matches[0];
    assert_eq!(
        m.team_1.iter().copied().collect::<HashSet<_>>(),
        HashSet::from([roster[0].id, roster[3].id])
    );
    assert_eq!(
        m.team_2.iter().copied().collect::<HashSet<_>>(),
        HashSet::from([roster[1].id, roster[2].id])
    );
    // Next four on court 2: 5th+8th vs 6th+7th
    let m = &matches[1];
    assert_eq!(
        m.team_1.iter().copied().collect::<HashSet<_>>(),
        HashSet::from([roster[4].id, roster[7].id])
    );
    assert_eq!(
        m.team_2.iter().copied().collect::<HashSet<_>>(),
        HashSet::from([roster[5].id, roster[6].id])
    );
}
