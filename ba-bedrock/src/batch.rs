use std::collections::HashSet;
use std::thread;

use crossbeam::channel::{Receiver, Sender, unbounded};
use tracing::{debug, warn};

use crate::builder::{ModelBuilder, atlas_path_for};
use crate::built::BuiltObject;
use crate::icon::IconRenderer;
use crate::source::SourceObject;

struct Job<'a> {
    index: usize,
    source: &'a SourceObject,
}

/// Converts independent objects on `workers` threads. Results come back in
/// input order. The renderer is shared by all workers.
///
/// Furniture with the same id next to the same model writes the same
/// `<id>_atlas.png`. Only the first such object runs on the pool; the rest are
/// converted one by one afterwards, so the last one's atlas is the one left on
/// disk.
pub fn convert_batch(
    builder: &ModelBuilder,
    objects: &[SourceObject],
    renderer: Option<&(dyn IconRenderer + Sync)>,
    workers: usize,
) -> Vec<BuiltObject> {
    if objects.is_empty() {
        return Vec::new();
    }
    let workers = workers.clamp(1, objects.len());

    let (job_tx, job_rx) = unbounded::<Job<'_>>();
    let (result_tx, result_rx) = unbounded::<(usize, BuiltObject)>();
    let mut claimed_atlases = HashSet::new();
    let mut deferred = Vec::new();
    for (index, source) in objects.iter().enumerate() {
        if let Some(atlas) = atlas_path_for(source) {
            if claimed_atlases.contains(&atlas) {
                warn!(
                    "{}:{} shares {} with an earlier object, converting it after the batch",
                    source.namespace,
                    source.id,
                    atlas.display()
                );
                deferred.push(index);
                continue;
            }
            claimed_atlases.insert(atlas);
        }
        if job_tx.send(Job { index, source }).is_err() {
            deferred.push(index);
        }
    }
    drop(job_tx);

    thread::scope(|scope| {
        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move || batch_worker(builder, renderer, job_rx, result_tx));
        }
    });
    drop(result_tx);

    let mut slots: Vec<Option<BuiltObject>> = vec![None; objects.len()];
    for (index, built) in result_rx.iter() {
        slots[index] = Some(built);
    }
    let renderer = renderer.map(|r| r as &dyn IconRenderer);
    for &index in &deferred {
        slots[index] = Some(builder.build(&objects[index], renderer));
    }
    debug!(
        "batch converted {} objects on {workers} workers ({} after the batch)",
        objects.len(),
        deferred.len()
    );
    slots.into_iter().flatten().collect()
}

fn batch_worker(
    builder: &ModelBuilder,
    renderer: Option<&(dyn IconRenderer + Sync)>,
    jobs: Receiver<Job<'_>>,
    results: Sender<(usize, BuiltObject)>,
) {
    let renderer = renderer.map(|r| r as &dyn IconRenderer);
    while let Ok(job) = jobs.recv() {
        let built = builder.build(job.source, renderer);
        if results.send((job.index, built)).is_err() {
            break;
        }
    }
}
