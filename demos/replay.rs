use std::io::BufRead;

use ctrack::tracker::CentroidTracker;
use ctrack::Detection;

/// Replays a detection dump (one `timestamp:json-array` line per frame)
/// through the tracker and prints `ts id x y missed [l t w h]` rows.
fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt().with_target(false).init();

    let mut args = std::env::args();

    let _ = args.next();
    let in_file_name = args.next().expect("expected detections file name");
    let dets_file = std::fs::File::open(in_file_name)?;

    let mut tracker = CentroidTracker::default();

    for line in std::io::BufReader::new(dets_file).lines() {
        let line = line?;

        let (ts, dets): (u64, Vec<Detection>) = if let Some(idx) = line.find(':') {
            let (ts, vector) = line.split_at(idx);

            match (ts.parse(), serde_json::from_str(&vector[1..])) {
                (Ok(ts), Ok(vector)) => (ts, vector),
                _ => {
                    eprintln!("wrong file format: {}", line);
                    continue;
                }
            }
        } else {
            eprintln!("wrong file format: expected `:`");
            continue;
        };

        for obj in tracker.update(&dets).values() {
            print!(
                "{} {} {} {} {}",
                ts, obj.id, obj.centroid.x, obj.centroid.y, obj.missed
            );

            if let Some(bb) = obj.bbox.as_ref().map(|bb| bb.as_ltwh()) {
                print!(" {} {} {} {}", bb.left(), bb.top(), bb.width(), bb.height());
            }

            println!();
        }
    }

    Ok(())
}
