use crate::count::{count_chunk, merge, FrequencyMap};
use crate::error::{Error, Result};
use crate::filtering::Punctuation;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::mpsc;
use std::thread;

/**
    Counts chunks on a fixed-size worker pool and merges the partial results.

    Every chunk becomes one task on the pool. Tasks hand their partial
    mapping over a channel to the calling thread, which is the only place
    the global mapping is written.
*/
pub struct Aggregator {
    pool: ThreadPool,
    punctuation: Punctuation,
}

impl Aggregator {
    pub fn new(threads: usize, punctuation: Punctuation) -> Result<Self> {
        if threads == 0 {
            return Err(Error::InvalidArgument("thread count must be positive"));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("wordfreq-count-{i}"))
            .build()?;

        Ok(Aggregator { pool, punctuation })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn punctuation(&self) -> &Punctuation {
        &self.punctuation
    }

    pub fn aggregate(&self, chunks: &[&str]) -> Result<FrequencyMap> {
        self.run(chunks, |chunk| count_chunk(chunk, &self.punctuation))
    }

    pub(crate) fn run<F>(&self, chunks: &[&str], count: F) -> Result<FrequencyMap>
    where
        F: Fn(&str) -> FrequencyMap + Sync,
    {
        let (sender, receiver) = mpsc::channel::<FrequencyMap>();
        let count = &count;

        log::debug!(
            "dispatching {} counting tasks onto {} workers",
            chunks.len(),
            self.threads()
        );

        thread::scope(|scope| -> Result<FrequencyMap> {
            // closes the channel once every task has finished
            let join = scope.spawn(move || {
                self.pool.scope(move |tasks| {
                    for &chunk in chunks {
                        let sender = sender.clone();
                        tasks.spawn(move |_| {
                            // the receiver is drained until all senders are gone
                            let _ = sender.send(count(chunk));
                        });
                    }
                });
            });

            let mut global = FrequencyMap::new();
            let mut merged = 0usize;
            for partial in receiver {
                merge(&mut global, partial);
                merged += 1;
            }

            join.join().map_err(Error::from_panic)?;

            if merged != chunks.len() {
                return Err(Error::TaskFailed(format!(
                    "merged {merged} of {} partial results",
                    chunks.len()
                )));
            }

            log::debug!(
                "merged {} partial results into {} distinct words",
                merged,
                global.len()
            );

            Ok(global)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::split;

    fn aggregator(threads: usize) -> Aggregator {
        Aggregator::new(threads, Punctuation::default()).unwrap()
    }

    #[test]
    fn it_should_sum_counts_across_chunks() {
        let global = aggregator(4)
            .aggregate(&["the cat", " the dog", " the end."])
            .unwrap();

        assert_eq!(global["the"], 3);
        assert_eq!(global["cat"], 1);
        assert_eq!(global["dog"], 1);
        assert_eq!(global["end"], 1);
        assert_eq!(global.len(), 4);
    }

    #[test]
    fn it_should_return_empty_for_no_chunks() {
        assert!(aggregator(2).aggregate(&[]).unwrap().is_empty());
    }

    #[test]
    fn it_should_reject_zero_threads() {
        assert!(matches!(
            Aggregator::new(0, Punctuation::default()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn it_should_handle_more_chunks_than_workers() {
        let text = "a b c d e f g h ".repeat(500);
        let chunks = split(&text, 4).unwrap();
        let global = aggregator(3).aggregate(&chunks).unwrap();

        assert_eq!(global.len(), 8);
        assert!(global.values().all(|&c| c == 500));
    }

    #[test]
    fn it_should_be_independent_of_scheduling() {
        let text = "one two three two three three four four four four ".repeat(64);
        let chunks = split(&text, 10).unwrap();
        let expected = aggregator(1).aggregate(&chunks).unwrap();

        for threads in [2, 4, 8] {
            let agg = aggregator(threads);
            for _ in 0..20 {
                assert_eq!(agg.aggregate(&chunks).unwrap(), expected);
            }
        }
    }

    #[test]
    fn it_should_fail_when_a_task_panics() {
        let agg = aggregator(2);
        let result = agg.run(&["ok", "boom", "fine"], |chunk| {
            if chunk == "boom" {
                panic!("counter exploded");
            }
            count_chunk(chunk, &Punctuation::default())
        });

        match result {
            Err(Error::TaskFailed(msg)) => assert!(msg.contains("counter exploded")),
            other => panic!("expected task failure, got {other:?}"),
        }
    }
}
