//! Tests for `SharedPipelineStore`.

use std::thread;

use crate::shared::SharedPipelineStore;
use crate::store::PipelineStore;

#[test]
fn update_and_read_share_one_store() {
  let shared = SharedPipelineStore::new(PipelineStore::new());
  let (a, b) = shared.update(|s| (s.add_node("A", None), s.add_node("B", None)));
  shared.update(|s| s.add_edge(&a, &b)).unwrap();
  let valid = shared.read(|s| s.validation().is_valid);
  assert!(valid);
}

#[test]
fn clones_see_the_same_graph() {
  let shared = SharedPipelineStore::default();
  let other = shared.clone();
  other.update(|s| {
    s.add_node("A", None);
  });
  assert_eq!(shared.read(|s| s.nodes().len()), 1);
}

#[test]
fn concurrent_writers_keep_validation_in_step() {
  let shared = SharedPipelineStore::from(PipelineStore::new());
  let handles: Vec<_> = (0..8)
    .map(|i| {
      let shared = shared.clone();
      thread::spawn(move || {
        for j in 0..25 {
          shared.update(|s| {
            s.add_node(format!("n{}-{}", i, j), None);
          });
          shared.read(|s| {
            let expected = crate::validation::validate_dag(s.nodes(), s.edges());
            assert_eq!(s.validation(), &expected);
          });
        }
      })
    })
    .collect();
  for h in handles {
    h.join().unwrap();
  }
  assert_eq!(shared.read(|s| s.nodes().len()), 200);
}
