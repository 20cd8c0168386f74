//! Test utilities and module declarations for storage tests.

use chrono::Utc;
use ideadup_core::{Idea, Subgroup};

use crate::MemoryStorage;

pub fn create_test_storage() -> MemoryStorage {
    MemoryStorage::new()
}

pub fn create_test_idea(id: &str, title: &str) -> Idea {
    Idea {
        idea_id: id.to_owned(),
        title: title.to_owned(),
        description: format!("Описание {id}"),
        keywords: vec!["П-1".to_owned()],
        embedding: Some(vec![1.0, 0.0, 0.5]),
        updated_at: Utc::now(),
    }
}

pub fn subgroup(id: &str, members: &[&str]) -> Subgroup {
    Subgroup::new(id, members.iter().map(|m| (*m).to_owned()).collect())
}

mod cluster_tests;
mod idea_tests;
