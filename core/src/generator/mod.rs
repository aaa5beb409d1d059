use core::future::Future;
use futures_util::future::try_join_all;
use hashbrown::HashSet;
use rand::Rng;

use crate::*;
pub use random::*;

mod random;

/// Title and full clue pool of one category, as a clue source returns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryData {
    pub title: String,
    pub clues: Vec<RawClue>,
}

/// External provider of trivia categories.
///
/// Any failure to supply data, whatever the cause, is reported as
/// [`GameError::SourceUnavailable`].
pub trait ClueSource {
    /// Up to `pool_size` candidate category ids, starting at listing position `offset`.
    fn fetch_category_ids(
        &self,
        pool_size: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Vec<CategoryId>>>;

    fn fetch_category(&self, id: CategoryId) -> impl Future<Output = Result<CategoryData>>;
}

/// Assembles a complete [`Board`] from a clue source.
///
/// Building never publishes anything; it either returns a full board or an error.
#[derive(Debug)]
pub struct BoardBuilder<'a, S: ?Sized> {
    source: &'a S,
    config: GameConfig,
    seed: u64,
}

impl<'a, S: ClueSource + ?Sized> BoardBuilder<'a, S> {
    pub fn new(source: &'a S, config: GameConfig, seed: u64) -> Self {
        Self {
            source,
            config,
            seed,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub async fn build(&self) -> Result<Board> {
        self.config.validate()?;
        let mut rng = seeded_rng(self.seed);

        let offset = random_offset(&self.config, &mut rng);
        log::debug!(
            "Requesting {} candidate categories at offset {}",
            self.config.category_pool_size,
            offset
        );
        let pool = self
            .source
            .fetch_category_ids(self.config.category_pool_size, offset)
            .await?;

        let candidates = dedup_ids(pool);
        let ids = sample(candidates, self.config.categories.into(), &mut rng)?;
        log::debug!("Selected categories {:?}", ids);

        let fetched = try_join_all(ids.iter().map(|&id| self.source.fetch_category(id))).await?;

        let categories = ids
            .into_iter()
            .zip(fetched)
            .map(|(id, data)| self.assemble_category(id, data, &mut rng))
            .collect::<Result<Vec<_>>>()?;

        Board::new(&self.config, categories)
    }

    fn assemble_category<R: Rng + ?Sized>(
        &self,
        id: CategoryId,
        data: CategoryData,
        rng: &mut R,
    ) -> Result<Category> {
        let CategoryData { title, clues } = data;
        let clues = sample(clues, self.config.clues_per_category.into(), rng)
            .inspect_err(|err| log::warn!("Category {} ({:?}) rejected: {}", id, title, err))?
            .into_iter()
            .map(normalize)
            .collect();
        Ok(Category::new(id, title, clues))
    }
}

/// Drops repeated ids, keeping the first occurrence of each.
fn dedup_ids(pool: Vec<CategoryId>) -> Vec<CategoryId> {
    let total = pool.len();
    let mut seen = HashSet::with_capacity(total);
    let ids: Vec<_> = pool.into_iter().filter(|&id| seen.insert(id)).collect();
    if ids.len() != total {
        log::warn!("Dropped {} duplicate category ids", total - ids.len());
    }
    ids
}
