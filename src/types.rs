/**
 * RecoEval
 * Copyright (C) 2026 RecoEval contributors
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use sprs::{CsMat, TriMat};

use crate::stats::DataDictionary;

/// User-item interaction strengths, rows = users, columns = items. Stored
/// row-compressed so that per-user slices are cheap.
pub type RatingMatrix = CsMat<f64>;

pub fn ratings_from_triplets(
    num_users: usize,
    num_items: usize,
    interactions: &[(u32, u32, f64)],
) -> RatingMatrix {

    let mut triplets = TriMat::with_capacity((num_users, num_items), interactions.len());

    // repeated (user, item) pairs accumulate, as in triplet format
    for &(user, item, strength) in interactions {
        triplets.add_triplet(user as usize, item as usize, strength);
    }

    triplets.to_csr()
}

pub fn ratings_matrix(
    records: &[(String, String, f64)],
    data_dict: &DataDictionary,
) -> RatingMatrix {

    let shape = (data_dict.num_users(), data_dict.num_items());
    let mut triplets = TriMat::with_capacity(shape, records.len());

    for (user, item, strength) in records {
        let user_index = data_dict.user_index(user);
        let item_index = data_dict.item_index(item);

        triplets.add_triplet(*user_index as usize, *item_index as usize, *strength);
    }

    triplets.to_csr()
}
