//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Interactions for one `port::method` pair, plus the last `seq` served.
#[derive(Debug, Default)]
struct Stream {
    pending: VecDeque<Interaction>,
    served: usize,
    last_seq: Option<u64>,
}

/// Replays interactions from a loaded cassette, serving them in recorded
/// order per port/method pair.
#[derive(Debug)]
pub struct CassetteReplayer {
    streams: HashMap<(String, String), Stream>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut streams: HashMap<(String, String), Stream> = HashMap::new();
        for interaction in &cassette.interactions {
            streams
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .pending
                .push_back(interaction.clone());
        }
        Self { streams }
    }

    /// Take the next interaction for the given port and method.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the given
    /// port/method combination. The message lists what was requested and
    /// which pairs the cassette does contain.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let key = (port.to_string(), method.to_string());
        let Some(stream) = self.streams.get_mut(&key) else {
            let mut available: Vec<String> =
                self.streams.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            available.sort();
            panic!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            );
        };

        let Some(interaction) = stream.pending.pop_front() else {
            panic!(
                "Cassette exhausted: all {served} interactions for port={port:?} method={method:?} \
                 have been consumed. Last interaction was seq={last_seq}.",
                served = stream.served,
                last_seq = stream.last_seq.unwrap_or(0),
            );
        };
        stream.served += 1;
        stream.last_seq = Some(interaction.seq);
        interaction
    }
}
