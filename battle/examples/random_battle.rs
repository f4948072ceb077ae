//! Random Battle Example
//!
//! Both players draft random rosters from the bundled catalog and pick
//! random affordable moves until one side is wiped out.
//!
//! Run with `RUST_LOG=debug` to see the engine's diagnostics.

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use trio_battle::{Catalog, MatchState, Player, StdRandom};
use tracing_subscriber::EnvFilter;

const CATALOG: &str = include_str!("characters.json");
const MAX_TURNS: usize = 500;

fn draft(state: &mut MatchState, player: Player, rng: &mut impl Rng) -> Result<()> {
    let ids: Vec<String> = state.catalog().iter().map(|t| t.id.clone()).collect();
    for _ in 0..state.rules().roster_size {
        let id = ids.choose(rng).context("catalog is empty")?;
        state.add_from_catalog(player, id)?;
    }
    state.confirm_roster(player)?;

    let names: Vec<&str> = state
        .team(player)
        .members()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    println!("[P{}] roster: {}", player.number(), names.join(", "));
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let catalog = Catalog::from_json(CATALOG)?;
    let mut state = MatchState::new(catalog);
    let mut picker = rand::thread_rng();
    let mut damage_rng = StdRandom::from_entropy();

    for player in Player::BOTH {
        draft(&mut state, player, &mut picker)?;
    }
    state.start_battle()?;

    let mut printed = 0;
    for _ in 0..MAX_TURNS {
        let player = state.current_turn();
        let active = state.active(player).context("no active character")?;

        let affordable: Vec<usize> = active.affordable_moves().map(|(i, _)| i).collect();
        let bench: Vec<usize> = state.bench(player).map(|(i, _)| i).collect();

        // Mostly attack, sometimes switch, and switch when nothing is affordable
        let wants_switch = !bench.is_empty() && (affordable.is_empty() || picker.gen_bool(0.1));
        if wants_switch {
            let index = *bench.choose(&mut picker).context("bench is empty")?;
            state.switch_character(player, index)?;
        } else {
            let index = *affordable
                .choose(&mut picker)
                .context("no affordable move and nobody to switch to")?;
            state.attack_with(player, index, &mut damage_rng)?;
        }

        for line in &state.log().entries()[printed..] {
            println!("{}", line);
        }
        printed = state.log().len();

        if state.check_game_over().is_over() {
            break;
        }
    }

    match state.result().announcement() {
        Some(text) => println!("{}", text),
        None => println!("No result after {} turns", MAX_TURNS),
    }
    for player in Player::BOTH {
        let team = state.team(player);
        println!(
            "[P{}] {}/{} still standing",
            player.number(),
            team.alive_count(),
            team.len()
        );
    }
    Ok(())
}
