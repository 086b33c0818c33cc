use clap::Parser;
use hanoi_core::Board;
use hanoi_game::GameConfig;
use hanoi_generator::LayoutSeed;

/// Play the Towers of Hanoi in the terminal.
///
/// Move every ring from the first tower to the last one, one ring at a time,
/// never putting a ring on top of a smaller one.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub(crate) struct Args {
    /// Number of towers.
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    towers: usize,

    /// Number of rings in each set.
    #[arg(long, value_name = "COUNT", default_value_t = 5)]
    rings: u32,

    /// Number of interleaved ring sets (at most one per tower).
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    sets: u32,

    /// Starting layout, e.g. "1 2 3 / / ". Towers are separated by '/', the
    /// top ring comes first, and a ring may carry a set as "<size>:<set>".
    #[arg(long, value_name = "LAYOUT")]
    start: Option<Board>,

    /// Winning layout, in the same format as --start.
    #[arg(long, value_name = "LAYOUT")]
    win: Option<Board>,

    /// Scatter the starting rings randomly across the towers.
    #[arg(long)]
    random: bool,

    /// Replay a random start from a seed (64 hex digits). Implies --random.
    #[arg(long, value_name = "HEX")]
    seed: Option<LayoutSeed>,
}

impl Args {
    pub(crate) fn to_config(&self) -> GameConfig {
        let mut config = GameConfig::default()
            .tower_count(self.towers)
            .ring_count(self.rings)
            .set_count(self.sets);
        if let Some(start) = &self.start {
            config = config.start_position(start.clone());
        }
        if let Some(win) = &self.win {
            config = config.winning_position(win.clone());
        }
        match (self.seed, self.random) {
            (Some(seed), _) => config.seed(seed),
            (None, true) => config.randomize(),
            (None, false) => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;
    use hanoi_game::Randomization;

    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("hanoi").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_game_defaults() {
        assert_eq!(parse(&[]).to_config(), GameConfig::default());
    }

    #[test]
    fn test_counts_and_layouts() {
        let config = parse(&[
            "--towers", "4", "--rings", "2", "--sets", "3", "--start", "1 2 / / / ", "--win",
            " / / / 1 2",
        ])
        .to_config();
        assert_eq!(config.tower_count, 4);
        assert_eq!(config.ring_count, 2);
        assert_eq!(config.set_count, 3);
        assert_eq!(config.start_position, Some(Board::standard(4, 2, 1)));
        assert_eq!(
            config.winning_position,
            Some(Board::standard(4, 2, 1).rotated())
        );
    }

    #[test]
    fn test_randomization_flags() {
        assert!(parse(&["--random"]).to_config().randomization.is_random());

        let seed = "00".repeat(32);
        assert_eq!(
            parse(&["--random", "--seed", &seed]).to_config().randomization,
            Randomization::Seeded(LayoutSeed::from_bytes([0; 32]))
        );
    }

    #[test]
    fn test_rejects_malformed_values() {
        let bad_layout = Args::try_parse_from(["hanoi", "--start", "1 x"]);
        assert!(bad_layout.is_err());
        let bad_seed = Args::try_parse_from(["hanoi", "--seed", "xyz"]);
        assert!(bad_seed.is_err());
    }
}
