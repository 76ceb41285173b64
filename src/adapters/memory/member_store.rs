use crate::domain::{
    MemberId, Page,
    commands::UpdateMember,
    member::{Member, NewMember},
};
use crate::ports::member_store::MemberStore as MemberStoreTrait;
use crate::ports::{Result, StoreError};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{paginate, touch};

/// In-memory implementation of MemberStore
#[derive(Default)]
pub struct MemberStore {
    members: RwLock<Vec<Member>>,
}

impl MemberStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberStoreTrait for MemberStore {
    async fn add(&self, member: NewMember) -> Result<Member> {
        let now = Utc::now();
        let stored = Member {
            id: member.id,
            name: member.name,
            created_at: now,
            updated_at: now,
        };

        self.members.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn get_by_id(&self, member_id: MemberId) -> Result<Member> {
        self.members
            .read()
            .await
            .iter()
            .find(|m| m.id == member_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update(&self, member_id: MemberId, update: UpdateMember) -> Result<Member> {
        let mut members = self.members.write().await;
        let member = members
            .iter_mut()
            .find(|m| m.id == member_id)
            .ok_or(StoreError::NotFound)?;

        if let Some(name) = update.name {
            member.name = name;
        }
        member.updated_at = touch(member.updated_at);

        Ok(member.clone())
    }

    async fn delete(&self, member_id: MemberId) -> Result<()> {
        self.members.write().await.retain(|m| m.id != member_id);
        Ok(())
    }

    async fn list(&self, page: Page) -> Result<Vec<Member>> {
        Ok(paginate(&self.members.read().await, page))
    }
}
