mod options;

use std::{fs::{self, OpenOptions}, io::Write, path::{Path, PathBuf}};

use itertools::Itertools;
use regex::Regex;
pub use options::HarnessOptions;

use crate::prelude::*;

/// The batch runner: plays every board with a fresh agent and records the average result.
pub struct Harness {
    options: HarnessOptions,
    config: AgentConfig,
}

/// How a single game ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameReport {
    pub score: usize,
    pub erased: usize,
    pub total: usize,
    pub percent: f64,
}

impl From<&GameBoard> for GameReport {
    fn from(board: &GameBoard) -> Self {
        GameReport {
            score: board.score(),
            erased: board.erased_count(),
            total: board.total_cells(),
            percent: board.percent_erased(),
        }
    }
}

/// The outcome of a whole run.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    /// Every board attempted, including those that failed to load.
    pub attempted: usize,
    pub average: f64,
}

impl Summary {
    /// The block appended to the results file.
    pub fn results_block(&self, label: &str) -> String {
        format!("-------------------\nLabel: {label}\nAverage Score: {:.2}%\n-------------------\n", self.average)
    }
}

/// A board file found by name in the boards directory: `board_<N>x<N>_<k>.dat`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardFile {
    pub size: usize,
    pub index: usize,
}

impl std::str::FromStr for BoardFile {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let pattern = Regex::new(r"^board_(?<rows>[0-9]+)x(?<cols>[0-9]+)_(?<index>[0-9]+)\.dat$")?;
        let Some(matches) = pattern.captures(s) else {
            return Err(anyhow!("{s} is not a board file name"));
        };

        let [rows, cols, index] = ["rows", "cols", "index"].map(|name| {
            matches.name(name).map_or("", |m| m.as_str()).parse::<usize>()
        });
        let (rows, cols) = (rows?, cols?);
        if rows != cols {
            return Err(anyhow!("board {s} is not square"));
        }
        Ok(BoardFile { size: rows, index: index? })
    }
}

/// Lists the board files in a directory, ordered by size and then by index.
pub fn discover_boards<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).with_context(|| format!("could not read boards directory {}", dir.display()))?;

    let mut found = vec![];
    for entry in entries {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Ok(file) = name.parse::<BoardFile>() {
            found.push(((file.size, file.index), path));
        }
    }

    Ok(found.into_iter().sorted_by_key(|(key, _)| *key).map(|(_, path)| path).collect())
}

/// Plays a game to completion, asking the agent for moves until it has none.
pub fn play_game(board: &mut GameBoard, agent: &mut JumpAgent) -> Result<GameReport> {
    while let Some(mv) = agent.choose_move(board) {
        board.apply_move(mv).with_context(|| format!("agent chose an illegal move on turn {}", agent.moves_chosen()))?;
    }
    Ok(GameReport::from(&*board))
}

impl Harness {
    pub fn new(options: HarnessOptions) -> Harness {
        Harness { config: options.agent_config(), options }
    }

    /// Plays every board, prints the results, and appends the summary to the results file.
    pub fn run(&self) -> Result<Summary> {
        let boards = match self.options.boards.is_empty() {
            true => discover_boards(&self.options.boards_dir)?,
            _    => self.options.boards.clone(),
        };
        if boards.is_empty() {
            return Err(anyhow!("no boards to play in {}", self.options.boards_dir.display()));
        }

        let mut total = 0.0;
        for path in &boards {
            total += self.play_file(path)?;
        }

        let summary = Summary { attempted: boards.len(), average: total / boards.len() as f64 };
        println!("Average Score: {:.2}% over {} boards", summary.average, summary.attempted);
        self.record(&summary)?;
        Ok(summary)
    }

    /// Plays one board file, returning the percentage erased. Boards that fail to load score 0.
    fn play_file(&self, path: &Path) -> Result<f64> {
        let layout = match BoardLayout::from_file(path) {
            Ok(layout) => layout,
            Err(e) => {
                log::error!("skipping {}: {e:#}", path.display());
                return Ok(0.0);
            }
        };

        let mut board = GameBoard::new(&layout);
        let mut agent = self.config.get_agent(&board);
        let report = play_game(&mut board, &mut agent)?;

        log::info!(
            "{}: score {}, erased {}/{} ({:.2}%)",
            path.display(), report.score, report.erased, report.total, report.percent
        );
        if self.options.show {
            println!("{}\n{}\n", path.display(), board.pretty());
        }
        Ok(report.percent)
    }

    fn record(&self, summary: &Summary) -> Result<()> {
        let path = &self.options.results;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| format!("could not create {}", parent.display()))?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(path)
            .with_context(|| format!("could not open results file {}", path.display()))?;
        file.write_all(summary.results_block(&self.options.label).as_bytes())?;
        Ok(())
    }
}
