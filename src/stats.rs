use fnv::FnvHashMap;

use crate::types::RatingMatrix;

pub struct DataDictionary {
    user_dict: FnvHashMap<String, u32>,
    item_dict: FnvHashMap<String, u32>,
    num_interactions: u64,
}

impl DataDictionary {

    pub fn num_users(&self) -> usize {
        self.user_dict.len()
    }

    pub fn num_items(&self) -> usize {
        self.item_dict.len()
    }

    pub fn num_interactions(&self) -> u64 {
        self.num_interactions
    }

    pub fn user_index(&self, name: &str) -> &u32 {
        self.user_dict.get(name).unwrap()
    }

    pub fn item_index(&self, name: &str) -> &u32 {
        self.item_dict.get(name).unwrap()
    }
}

impl DataDictionary {

    pub fn from<'a, I>(records: I) -> Self
    where
        I: Iterator<Item = &'a (String, String, f64)>,
    {
        let mut user_index: u32 = 0;
        let mut user_dict: FnvHashMap<String, u32> =
            FnvHashMap::with_capacity_and_hasher(100, Default::default());

        let mut item_index: u32 = 0;
        let mut item_dict: FnvHashMap<String, u32> =
            FnvHashMap::with_capacity_and_hasher(100, Default::default());

        let mut num_interactions: u64 = 0;

        for (user, item, _strength) in records {

            if !user_dict.contains_key(user) {
                user_dict.insert(user.clone(), user_index);
                user_index += 1;
            }

            if !item_dict.contains_key(item) {
                item_dict.insert(item.clone(), item_index);
                item_index += 1;
            }

            num_interactions += 1;
        }

        DataDictionary { user_dict, item_dict, num_interactions }
    }
}

pub struct Renaming {
    user_names: FnvHashMap<u32, String>,
    item_names: FnvHashMap<u32, String>,
}

impl Renaming {

    pub fn user_name(&self, user_index: u32) -> &str {
        &self.user_names[&user_index]
    }

    pub fn item_name(&self, item_index: u32) -> &str {
        &self.item_names[&item_index]
    }
}

impl From<DataDictionary> for Renaming {

    fn from(data_dict: DataDictionary) -> Self {

        let mut user_names: FnvHashMap<u32, String> =
            FnvHashMap::with_capacity_and_hasher(data_dict.num_users(), Default::default());

        let mut item_names: FnvHashMap<u32, String> =
            FnvHashMap::with_capacity_and_hasher(data_dict.num_items(), Default::default());

        for (user, user_id) in data_dict.user_dict.into_iter() {
            user_names.insert(user_id, user);
        }

        for (item, item_id) in data_dict.item_dict.into_iter() {
            item_names.insert(item_id, item);
        }

        Renaming { user_names, item_names }
    }
}

/// User indices ranked by how many non-zero interactions the user has, most
/// active first. Explicitly stored zeros do not count, just as the splitter
/// never samples them. Ties go to the smaller index, so the ranking is
/// deterministic.
pub fn active_users(ratings: &RatingMatrix) -> Vec<usize> {

    let counts: Vec<usize> = ratings
        .outer_iterator()
        .map(|row| row.iter().filter(|&(_, &strength)| strength != 0.0).count())
        .collect();

    let mut users: Vec<usize> = (0..ratings.rows()).collect();
    users.sort_unstable_by(|&a, &b| counts[b].cmp(&counts[a]).then(a.cmp(&b)));

    users
}

#[cfg(test)]
mod tests {

    use crate::stats::{active_users, DataDictionary};
    use crate::types;

    #[test]
    fn most_active_first() {
        let interactions = vec![
            (0, 0, 1.0),
            (1, 0, 1.0),
            (1, 1, 1.0),
            (1, 2, 1.0),
            (3, 1, 1.0),
            (3, 3, 1.0),
        ];
        let ratings = types::ratings_from_triplets(4, 4, &interactions);

        assert_eq!(active_users(&ratings), vec![1, 3, 0, 2]);
    }

    #[test]
    fn ties_go_to_the_smaller_index() {
        let interactions = vec![(0, 1, 1.0), (2, 0, 1.0)];
        let ratings = types::ratings_from_triplets(3, 2, &interactions);

        assert_eq!(active_users(&ratings), vec![0, 2, 1]);
    }

    #[test]
    fn stored_zeros_do_not_count_as_interactions() {
        let interactions = vec![
            (0, 0, 0.0),
            (0, 1, 0.0),
            (0, 2, 0.0),
            (1, 0, 2.0),
            (1, 1, 3.0),
        ];
        let ratings = types::ratings_from_triplets(2, 4, &interactions);

        // three explicit zeros lose to two real interactions
        assert_eq!(active_users(&ratings), vec![1, 0]);
    }

    #[test]
    fn dictionary_indexes_consecutively() {
        let records = vec![
            ("alice".to_string(), "apple".to_string(), 1.0),
            ("alice".to_string(), "dog".to_string(), 1.0),
            ("bob".to_string(), "apple".to_string(), 1.0),
        ];

        let data_dict = DataDictionary::from(records.iter());

        assert_eq!(data_dict.num_users(), 2);
        assert_eq!(data_dict.num_items(), 2);
        assert_eq!(data_dict.num_interactions(), 3);
        assert_eq!(*data_dict.user_index("bob"), 1);
        assert_eq!(*data_dict.item_index("dog"), 1);
    }
}
