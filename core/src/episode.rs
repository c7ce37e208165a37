//! Episode lifecycle and the (decision, snapshot) samples recorded while
//! playing.
//!
//! A training archive is written at most once per episode, only when the bot
//! wins, and is named after the moment the episode started.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::Utc;
use image::RgbImage;
use log::{debug, info};
use ndarray::{Array2, Array4};
use ndarray_npy::NpzWriter;
use rust_sc2::prelude::GameResult;

use crate::Result;

/// Number of discrete attack decisions.
pub const ACTIONS: usize = 4;

pub const ACTIONS_ARRAY: &str = "actions.npy";
pub const FRAMES_ARRAY: &str = "frames.npy";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeResult {
    Victory,
    Defeat,
    Tie,
    Undecided,
}

impl From<GameResult> for EpisodeResult {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::Victory => EpisodeResult::Victory,
            GameResult::Defeat => EpisodeResult::Defeat,
            GameResult::Tie => EpisodeResult::Tie,
            GameResult::Undecided => EpisodeResult::Undecided,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrainingSample {
    pub action: [f64; ACTIONS],
    pub frame: RgbImage,
}

impl TrainingSample {
    pub fn new(choice: usize, frame: RgbImage) -> Self {
        let mut action = [0f64; ACTIONS];
        action[choice] = 1f64;
        Self { action, frame }
    }
}

#[derive(Debug, Default)]
pub struct TrainingData {
    samples: Vec<TrainingSample>,
}

impl TrainingData {
    pub fn push(&mut self, sample: TrainingSample) {
        debug!("attack: {:?}", sample.action);
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[TrainingSample] {
        &self.samples
    }

    /// Writes `actions` (N x 4) and `frames` (N x H x W x 3, blue green red)
    /// into one npz archive.
    pub fn save(&self, path: &Path) -> Result<()> {
        let (height, width) = self
            .samples
            .first()
            .map_or((0, 0), |s| (s.frame.height() as usize, s.frame.width() as usize));

        let actions = Array2::from_shape_vec(
            (self.samples.len(), ACTIONS),
            self.samples.iter().flat_map(|s| s.action).collect(),
        )?;
        let frames = Array4::from_shape_vec(
            (self.samples.len(), height, width, 3),
            self.samples
                .iter()
                .flat_map(|s| s.frame.pixels().flat_map(|p| [p[2], p[1], p[0]]))
                .collect(),
        )?;

        let mut npz = NpzWriter::new(File::create(path)?);
        npz.add_array(ACTIONS_ARRAY, &actions)?;
        npz.add_array(FRAMES_ARRAY, &frames)?;
        npz.finish()?;
        Ok(())
    }
}

pub struct Episode {
    started_at: String,
    output_dir: PathBuf,
}

impl Episode {
    /// Stamps the episode start and makes sure the output directory exists.
    ///
    /// A plain file already sitting at `output_dir` makes this fail.
    pub fn start<P: AsRef<Path>>(output_dir: P) -> Result<Self> {
        let started_at = Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string();
        let output_dir = output_dir.as_ref().to_path_buf();
        info!("Episode started at {}", started_at);
        if !output_dir.is_dir() {
            fs::create_dir(&output_dir)?;
        }
        Ok(Self {
            started_at,
            output_dir,
        })
    }

    pub fn started_at(&self) -> &str {
        &self.started_at
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.npz", self.started_at))
    }

    /// Persists the recorded samples when the episode was won. Returns the
    /// written path, if any.
    pub fn finish(&self, result: EpisodeResult, data: &TrainingData) -> Result<Option<PathBuf>> {
        info!("Episode ended with {:?}", result);
        if result != EpisodeResult::Victory {
            return Ok(None);
        }
        let path = self.output_path();
        data.save(&path)?;
        info!("Saved {} training samples to {:?}", data.len(), path);
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use ndarray::{Array2, Array4};
    use ndarray_npy::NpzReader;

    fn data_with(samples: usize) -> TrainingData {
        let mut data = TrainingData::default();
        for i in 0..samples {
            let frame = RgbImage::from_pixel(4, 3, Rgb([i as u8, 0, 0]));
            data.push(TrainingSample::new(i % ACTIONS, frame));
        }
        data
    }

    #[test]
    fn one_hot_action() {
        let sample = TrainingSample::new(2, RgbImage::new(1, 1));
        assert_eq!(sample.action, [0f64, 0f64, 1f64, 0f64]);
    }

    #[test]
    fn start_creates_output_dir() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("train_data");
        let episode = Episode::start(&dir).unwrap();
        assert!(dir.is_dir());
        assert!(episode.output_path().starts_with(&dir));
        assert!(episode
            .output_path()
            .to_string_lossy()
            .ends_with(&format!("{}.npz", episode.started_at())));
    }

    #[test]
    fn start_reuses_existing_dir() {
        let root = tempfile::tempdir().unwrap();
        assert!(Episode::start(root.path()).is_ok());
    }

    #[test]
    fn start_fails_on_plain_file() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("train_data");
        fs::write(&file, b"not a directory").unwrap();
        assert!(Episode::start(&file).is_err());
    }

    #[test]
    fn victory_writes_archive() {
        let root = tempfile::tempdir().unwrap();
        let episode = Episode::start(root.path()).unwrap();
        let data = data_with(3);

        let path = episode
            .finish(EpisodeResult::Victory, &data)
            .unwrap()
            .unwrap();
        assert!(path.is_file());

        let mut npz = NpzReader::new(File::open(&path).unwrap()).unwrap();
        let actions: Array2<f64> = npz.by_name(ACTIONS_ARRAY).unwrap();
        let frames: Array4<u8> = npz.by_name(FRAMES_ARRAY).unwrap();
        assert_eq!(actions.shape(), &[3, ACTIONS]);
        assert_eq!(frames.shape(), &[3, 3, 4, 3]);
        assert_eq!(actions[[1, 1]], 1f64);
        assert_eq!(frames[[2, 0, 0, 0]], 0);
        assert_eq!(frames[[2, 0, 0, 2]], 2);
    }

    #[test]
    fn saved_frames_are_blue_green_red() {
        use crate::fake::FakeGame;
        use crate::intel::render;
        use rust_sc2::prelude::UnitTypeId;

        let mut game = FakeGame::default();
        game.add(5, UnitTypeId::Stargate, 100f32, 100f32);
        let frame = render(&game);
        let row = game.map_size.1 - 1 - 100;
        let mut data = TrainingData::default();
        data.push(TrainingSample::new(3, frame));

        let root = tempfile::tempdir().unwrap();
        let episode = Episode::start(root.path()).unwrap();
        let path = episode
            .finish(EpisodeResult::Victory, &data)
            .unwrap()
            .unwrap();

        let mut npz = NpzReader::new(File::open(&path).unwrap()).unwrap();
        let frames: Array4<u8> = npz.by_name(FRAMES_ARRAY).unwrap();
        assert_eq!(frames[[0, row, 100, 0]], 255);
        assert_eq!(frames[[0, row, 100, 1]], 0);
        assert_eq!(frames[[0, row, 100, 2]], 0);
    }

    #[test]
    fn other_results_write_nothing() {
        for result in [
            EpisodeResult::Defeat,
            EpisodeResult::Tie,
            EpisodeResult::Undecided,
        ] {
            let root = tempfile::tempdir().unwrap();
            let episode = Episode::start(root.path()).unwrap();
            let written = episode.finish(result, &data_with(2)).unwrap();
            assert!(written.is_none());
            assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
        }
    }
}
