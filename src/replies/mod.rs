//! The reply pipeline.
//!
//! Generators turn an incoming message into [`Reply`] actions; the
//! [`Dispatcher`] flattens everything its generators produce and
//! applies the actions to the chat in order.

mod action;
mod cache;
mod error;
mod generate;
mod weighted;

pub mod discord;

pub use action::{Reply, Responder, StickerRef};
pub use cache::TtlCache;
pub use error::{ReplyError, SourceError};
pub use generate::{Generator, ReplyFn, ReplySources};
pub use weighted::Weighted;

use rand::Rng;
use tracing::{debug, info};

/// Runs a fixed set of generators against an incoming message and
/// applies everything they produce, in order.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    generators: Vec<Generator>,
}

impl Dispatcher {
    pub fn new(generators: impl IntoIterator<Item = Generator>) -> Self {
        Self {
            generators: generators.into_iter().collect(),
        }
    }

    /// A dispatcher around a single reply function.
    pub fn single(reply_fn: ReplyFn) -> Self {
        Self::new([Generator::One(reply_fn)])
    }

    /// A dispatcher that draws one reply function by weight per message.
    pub fn weighted(options: Weighted<ReplyFn>) -> Self {
        Self::new([Generator::Weighted(options)])
    }

    /// Collects the replies of every generator in configuration order,
    /// then applies them one at a time. The first failed send aborts
    /// the rest of the batch.
    pub async fn handle(
        &self,
        message: &str,
        sources: &impl ReplySources,
        responder: &impl Responder,
        rng: &mut impl Rng,
    ) -> Result<(), ReplyError> {
        info!(text = message, "handling incoming message");

        let mut replies = Vec::new();
        for generator in &self.generators {
            let reply_fn = generator.resolve(rng);
            replies.extend(reply_fn.generate(sources, rng).await?);
        }

        debug!(?replies, "collected replies");

        apply_all(&replies, responder).await
    }
}

/// Applies replies in sequence, one transport call each. No
/// parallelism; a failure leaves the rest of the batch unapplied.
async fn apply_all(replies: &[Reply], responder: &impl Responder) -> Result<(), ReplyError> {
    for reply in replies {
        reply.apply(responder).await?;
    }

    Ok(())
}
