use fnv::{FnvHashMap, FnvHashSet};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use sprs::TriMat;

pub mod errors;
pub mod types;
pub mod stats;
pub mod metrics;


use crate::errors::EvalError;
use crate::types::RatingMatrix;

/// Partitions `ratings` into disjoint train and test matrices for evaluating
/// a recommender.
///
/// We take the leading `floor(fraction * num_users)` entries of
/// `active_users` as evaluation users and hold out up to `count` of each
/// one's interactions, drawn uniformly at random without replacement from
/// their non-zero columns. A user with fewer than `count` interactions loses
/// all of them to the test set. Returns the train matrix, the test matrix
/// and the list of evaluation users; the input matrix is left untouched.
pub fn train_test_split<R: Rng>(
    ratings: &RatingMatrix,
    active_users: &[usize],
    fraction: f64,
    count: usize,
    rng: &mut R,
) -> Result<(RatingMatrix, RatingMatrix, Vec<usize>), EvalError> {

    let num_users = ratings.rows();

    if !(0.0..=1.0).contains(&fraction) {
        return Err(EvalError::InvalidArgument(format!(
            "fraction must lie in [0, 1], got {}",
            fraction,
        )));
    }

    if count == 0 {
        return Err(EvalError::InvalidArgument(
            "count must be positive".to_string(),
        ));
    }

    if let Some(&user) = active_users.iter().find(|&&user| user >= num_users) {
        return Err(EvalError::InvalidArgument(format!(
            "user index {} out of range for {} users",
            user, num_users,
        )));
    }

    let num_eligible = (fraction * num_users as f64) as usize;
    let selected_users = &active_users[..num_eligible.min(active_users.len())];

    let mut held_out: FnvHashMap<usize, FnvHashSet<usize>> =
        FnvHashMap::with_capacity_and_hasher(selected_users.len(), Default::default());

    for &user in selected_users {
        let columns = sample_held_out_columns(ratings, user, count, rng);

        if !columns.is_empty() {
            held_out.entry(user).or_default().extend(columns);
        }
    }

    let num_held_out: usize = held_out.values().map(|columns| columns.len()).sum();

    let mut train_triplets = TriMat::with_capacity(ratings.shape(), ratings.nnz() - num_held_out);
    let mut test_triplets = TriMat::with_capacity(ratings.shape(), num_held_out);

    for (user, row) in ratings.outer_iterator().enumerate() {

        let held_out_columns = held_out.get(&user);

        for (item, &strength) in row.iter() {

            let goes_to_test =
                held_out_columns.map_or(false, |columns| columns.contains(&item));

            if goes_to_test {
                test_triplets.add_triplet(user, item, strength);
            } else {
                train_triplets.add_triplet(user, item, strength);
            }
        }
    }

    debug!(
        "{} of {} interactions held out for {} of {} users",
        num_held_out,
        ratings.nnz(),
        held_out.len(),
        num_users,
    );

    let train: RatingMatrix = train_triplets.to_csr();
    let test: RatingMatrix = test_triplets.to_csr();

    Ok((train, test, selected_users.to_vec()))
}

fn sample_held_out_columns<R: Rng>(
    ratings: &RatingMatrix,
    user: usize,
    count: usize,
    rng: &mut R,
) -> Vec<usize> {

    let interacted_columns: Vec<usize> = match ratings.outer_view(user) {
        Some(row) => row
            .iter()
            .filter(|&(_, &strength)| strength != 0.0)
            .map(|(item, _)| item)
            .collect(),
        None => Vec::new(),
    };

    let size = count.min(interacted_columns.len());

    interacted_columns
        .choose_multiple(rng, size)
        .cloned()
        .collect()
}
