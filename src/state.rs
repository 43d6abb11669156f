use super::*;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Identifier for one added member, unique per add within a session.
/// Allocated from a monotonic counter rather than wall-clock time so two
/// adds in the same clock tick can never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberId(u64);

impl MemberId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One captured set of form answers, field order preserved. Immutable once
/// created.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemberRecord {
    entries: Vec<(&'static str, FieldValue)>,
}

impl MemberRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field_id: &'static str, value: FieldValue) {
        self.entries.push((field_id, value));
    }

    pub fn entries(&self) -> &[(&'static str, FieldValue)] {
        &self.entries
    }

    pub fn get(&self, field_id: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(id, _)| *id == field_id)
            .map(|(_, value)| value)
    }
}

// Serialized as an object with keys in field order, independent of any map
// ordering feature.
impl Serialize for MemberRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field_id, value) in &self.entries {
            map.serialize_entry(field_id, value)?;
        }
        map.end()
    }
}

/// The live, insertion-ordered set of member records for the current
/// session. Owned by the controller and mutated only inside its handlers.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    members: Vec<(MemberId, MemberRecord)>,
    next_id: u64,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: MemberRecord) -> MemberId {
        self.next_id += 1;
        let member = MemberId(self.next_id);
        self.members.push((member, record));
        member
    }

    pub fn remove(&mut self, member: MemberId) -> bool {
        let before = self.members.len();
        self.members.retain(|(id, _)| *id != member);
        self.members.len() != before
    }

    pub fn contains(&self, member: MemberId) -> bool {
        self.members.iter().any(|(id, _)| *id == member)
    }

    pub fn record(&self, member: MemberId) -> Option<&MemberRecord> {
        self.members
            .iter()
            .find(|(id, _)| *id == member)
            .map(|(_, record)| record)
    }

    pub fn records(&self) -> impl Iterator<Item = &MemberRecord> {
        self.members.iter().map(|(_, record)| record)
    }

    pub fn member_ids(&self) -> impl Iterator<Item = MemberId> + '_ {
        self.members.iter().map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

// Submission ignores ids: records only, insertion order.
impl Serialize for FormState {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.members.len()))?;
        for (_, record) in &self.members {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}
