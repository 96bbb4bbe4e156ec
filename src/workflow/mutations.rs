use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// 진행 중인 변경 요청의 식별자
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MutationKey {
    Create,
    Update(String),
    Delete(String),
}

impl fmt::Display for MutationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationKey::Create => write!(f, "create"),
            MutationKey::Update(id) => write!(f, "update {}", id),
            MutationKey::Delete(id) => write!(f, "delete {}", id),
        }
    }
}

/// 현재 진행 중인 변경 요청 집합
///
/// 폼 페이지와 목록 페이지가 같은 tracker를 공유하면 한쪽에서 삭제 중일 때
/// 다른 쪽 동작을 막을 수 있다. Clone은 같은 집합을 가리킨다.
#[derive(Debug, Clone, Default)]
pub struct MutationTracker {
    in_flight: Arc<Mutex<HashSet<MutationKey>>>,
}

impl MutationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 키를 등록하고 guard 반환. 이미 진행 중이면 `None`.
    pub fn begin(&self, key: MutationKey) -> Option<MutationGuard> {
        self.begin_unless(key, &[])
    }

    /// `conflicting` 중 하나라도 진행 중이면 `None`. 검사와 등록은 한 번의 잠금 안에서 일어난다.
    pub fn begin_unless(
        &self,
        key: MutationKey,
        conflicting: &[MutationKey],
    ) -> Option<MutationGuard> {
        let mut in_flight = self.lock();

        if conflicting.iter().any(|k| in_flight.contains(k)) || !in_flight.insert(key.clone()) {
            return None;
        }
        drop(in_flight);

        Some(MutationGuard {
            tracker: self.clone(),
            key,
        })
    }

    /// 여러 키를 한꺼번에 등록. 하나라도 진행 중이면 아무것도 등록하지 않는다.
    pub fn begin_all(&self, keys: Vec<MutationKey>) -> Option<Vec<MutationGuard>> {
        let mut in_flight = self.lock();

        if keys.iter().any(|k| in_flight.contains(k)) {
            return None;
        }

        for key in &keys {
            in_flight.insert(key.clone());
        }
        drop(in_flight);

        Some(
            keys.into_iter()
                .map(|key| MutationGuard {
                    tracker: self.clone(),
                    key,
                })
                .collect(),
        )
    }

    pub fn is_mutating(&self) -> bool {
        !self.lock().is_empty()
    }

    pub fn is_mutating_key(&self, key: &MutationKey) -> bool {
        self.lock().contains(key)
    }

    pub fn any_deleting(&self) -> bool {
        self.lock().iter().any(|k| matches!(k, MutationKey::Delete(_)))
    }

    /// create/update 중인지
    pub fn any_saving(&self) -> bool {
        self.lock()
            .iter()
            .any(|k| matches!(k, MutationKey::Create | MutationKey::Update(_)))
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<MutationKey>> {
        // 잠금 중 panic이 나도 집합 자체는 유효하다
        self.in_flight.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// drop 시 tracker에서 키를 제거
#[derive(Debug)]
pub struct MutationGuard {
    tracker: MutationTracker,
    key: MutationKey,
}

impl MutationGuard {
    pub fn key(&self) -> &MutationKey {
        &self.key
    }
}

impl Drop for MutationGuard {
    fn drop(&mut self) {
        self.tracker.lock().remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_rejects_duplicate_key() {
        let tracker = MutationTracker::new();

        let guard = tracker.begin(MutationKey::Create);
        assert!(guard.is_some());
        assert!(tracker.begin(MutationKey::Create).is_none());
        assert!(tracker.is_mutating());
        assert!(tracker.any_saving());

        drop(guard);
        assert!(!tracker.is_mutating());
        assert!(tracker.begin(MutationKey::Create).is_some());
    }

    #[test]
    fn test_begin_all_is_all_or_nothing() {
        let tracker = MutationTracker::new();
        let _b = tracker.begin(MutationKey::Delete("b".to_string()));

        let keys = vec![
            MutationKey::Delete("a".to_string()),
            MutationKey::Delete("b".to_string()),
        ];
        assert!(tracker.begin_all(keys).is_none());
        assert!(!tracker.is_mutating_key(&MutationKey::Delete("a".to_string())));

        let guards = tracker
            .begin_all(vec![MutationKey::Delete("c".to_string())])
            .unwrap();
        assert_eq!(guards.len(), 1);
        assert!(tracker.any_deleting());
    }

    #[test]
    fn test_begin_unless_respects_conflicts() {
        let tracker = MutationTracker::new();
        let update = MutationKey::Update("1".to_string());
        let delete = MutationKey::Delete("1".to_string());

        let saving = tracker.begin_unless(update.clone(), &[delete.clone()]).unwrap();
        assert_eq!(saving.key(), &update);

        assert!(tracker.begin_unless(delete.clone(), &[update.clone()]).is_none());
        assert!(!tracker.is_mutating_key(&delete));

        // 다른 레코드는 영향을 받지 않는다
        let other = MutationKey::Delete("2".to_string());
        assert!(tracker
            .begin_unless(other, &[MutationKey::Update("2".to_string())])
            .is_some());

        drop(saving);
        assert!(tracker.begin_unless(delete, &[update]).is_some());
    }

    #[test]
    fn test_begin_unless_concurrent_save_and_delete() {
        let tracker = MutationTracker::new();
        let update = MutationKey::Update("1".to_string());
        let delete = MutationKey::Delete("1".to_string());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let tracker = tracker.clone();
                let (key, conflict) = if i % 2 == 0 {
                    (update.clone(), delete.clone())
                } else {
                    (delete.clone(), update.clone())
                };
                // guard는 join 이후까지 살아있다
                std::thread::spawn(move || tracker.begin_unless(key, &[conflict]))
            })
            .collect();

        let winners: Vec<_> = handles
            .into_iter()
            .filter_map(|h| h.join().unwrap())
            .collect();

        assert_eq!(winners.len(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let tracker = MutationTracker::new();
        let shared = tracker.clone();

        let _guard = tracker.begin(MutationKey::Update("1".to_string()));
        assert!(shared.is_mutating_key(&MutationKey::Update("1".to_string())));
    }
}
