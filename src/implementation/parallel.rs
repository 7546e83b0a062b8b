// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the parallel indexing driver: `divide_evenly`, which
//! splits a range into near-equal contiguous chunks, and `peach_indexed`,
//! which runs a per-index callback across as many scoped OS threads as there
//! are chunks and propagates the first worker panic as a terminal error.

use std::thread;

use crate::CoreError;

/// Splits `[0, n)` into `m` contiguous chunk sizes: the first `m - 1` chunks
/// have size `n / m`, the last one absorbs the remainder. Returns an empty
/// vector when `m == 0`. Panics if `m > n` (a caller asking for more workers
/// than there is work to hand out is a programming error, not a runtime
/// condition).
pub fn divide_evenly(n: usize, m: usize) -> Vec<usize> {
    assert!(m <= n, "cannot divide {n} items into {m} non-empty chunks");
    if m == 0 {
        return Vec::new();
    }
    let base = n / m;
    let mut sizes = vec![base; m];
    sizes[m - 1] = n - base * (m - 1);
    sizes
}

/// Runs `f(i, &coll[i])` for every index `i` in `[0, coll.len())`, spread
/// over `min(threads, coll.len())` scoped worker threads, each owning one
/// contiguous range produced by [`divide_evenly`]. Blocks until every
/// worker has finished. If any worker panics, that panic is caught and
/// turned into a [`CoreError::IndexBuildFailure`] rather than unwinding
/// across the thread boundary; the first panic observed (in thread order)
/// is the one reported.
pub fn peach_indexed<T, F>(coll: &[T], threads: usize, f: F) -> Result<(), CoreError>
where
    T: Sync,
    F: Fn(usize, &T) + Sync,
{
    let threads = threads.min(coll.len());
    if threads == 0 {
        return Ok(());
    }
    let sizes = divide_evenly(coll.len(), threads);

    let panics: Vec<Option<String>> = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(threads);
        let mut start = 0;
        for size in sizes {
            let end = start + size;
            let chunk = &coll[start..end];
            let f = &f;
            handles.push(scope.spawn(move || {
                for (offset, item) in chunk.iter().enumerate() {
                    f(start + offset, item);
                }
            }));
            start = end;
        }
        handles
            .into_iter()
            .map(|h| h.join().err().map(|e| panic_message(&e)))
            .collect()
    });

    if let Some(message) = panics.into_iter().flatten().next() {
        return Err(CoreError::IndexBuildFailure(message));
    }
    Ok(())
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker thread panicked with a non-string payload".to_string()
    }
}

#[cfg(test)]
mod test_parallel {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn divide_evenly_empty_for_zero_workers() {
        assert_eq!(Vec::<usize>::new(), divide_evenly(10, 0));
    }

    #[test]
    fn divide_evenly_splits_remainder_into_last_chunk() {
        assert_eq!(vec![3, 3, 4], divide_evenly(10, 3));
        assert_eq!(vec![2, 2], divide_evenly(4, 2));
        assert_eq!(vec![7], divide_evenly(7, 1));
    }

    #[test]
    #[should_panic]
    fn divide_evenly_rejects_more_workers_than_items() {
        divide_evenly(2, 3);
    }

    #[test]
    fn peach_indexed_visits_every_index_exactly_once() {
        let coll: Vec<usize> = (0..100).collect();
        let seen = Mutex::new(vec![false; coll.len()]);
        peach_indexed(&coll, 8, |i, &v| {
            assert_eq!(i, v);
            seen.lock()[i] = true;
        })
        .unwrap();
        assert!(seen.lock().iter().all(|&b| b));
    }

    #[test]
    fn peach_indexed_clamps_threads_to_collection_size() {
        let coll = vec![1, 2, 3];
        let count = std::sync::atomic::AtomicUsize::new(0);
        peach_indexed(&coll, 16, |_, _| {
            count.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        })
        .unwrap();
        assert_eq!(3, count.load(std::sync::atomic::Ordering::SeqCst));
    }

    #[test]
    fn peach_indexed_on_empty_collection_is_a_noop() {
        let coll: Vec<usize> = Vec::new();
        peach_indexed(&coll, 4, |_, _| panic!("should never run")).unwrap();
    }

    #[test]
    fn a_worker_panic_propagates_as_index_build_failure() {
        let coll: Vec<usize> = (0..10).collect();
        let result = peach_indexed(&coll, 4, |i, _| {
            if i == 5 {
                panic!("boom");
            }
        });
        assert!(matches!(result, Err(CoreError::IndexBuildFailure(_))));
    }
}
