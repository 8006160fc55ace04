//! 站内私信存储操作

use std::collections::HashMap;
use std::str::FromStr;

use super::SeaOrmStorage;
use crate::entity::messages::{ActiveModel, Column, Entity as Messages, Model as MessageModel};
use crate::entity::users::{Column as UserColumn, Entity as Users, Model as UserModel};
use crate::errors::{AcademiaError, Result};
use crate::models::{
    PaginationInfo,
    messages::{
        entities::Message,
        requests::SendMessageRequest,
        responses::{MessageListItem, MessageListResponse, MessageParticipant},
    },
    users::entities::UserRole,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Select, Set,
};

impl SeaOrmStorage {
    /// 发送私信
    pub async fn send_message_impl(
        &self,
        sender_id: i64,
        req: SendMessageRequest,
    ) -> Result<Message> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            sender_id: Set(sender_id),
            recipient_id: Set(req.recipient_id),
            subject: Set(req.subject),
            content: Set(req.content),
            is_read: Set(false),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("发送私信失败: {e}")))?;

        Ok(result.into_message())
    }

    /// 当前用户收发的全部私信（分页，新的在前）
    pub async fn list_messages_for_user_impl(
        &self,
        user_id: i64,
        page: i64,
        size: i64,
    ) -> Result<MessageListResponse> {
        let select = Messages::find()
            .filter(
                Condition::any()
                    .add(Column::SenderId.eq(user_id))
                    .add(Column::RecipientId.eq(user_id)),
            )
            .order_by_desc(Column::CreatedAt);

        self.paginate_messages(select, page, size).await
    }

    /// 与某个用户的对话（分页，旧的在前）
    pub async fn list_conversation_impl(
        &self,
        user_id: i64,
        peer_id: i64,
        page: i64,
        size: i64,
    ) -> Result<MessageListResponse> {
        let select = Messages::find()
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(Column::SenderId.eq(user_id))
                            .add(Column::RecipientId.eq(peer_id)),
                    )
                    .add(
                        Condition::all()
                            .add(Column::SenderId.eq(peer_id))
                            .add(Column::RecipientId.eq(user_id)),
                    ),
            )
            .order_by_asc(Column::CreatedAt);

        self.paginate_messages(select, page, size).await
    }

    /// 标记单条已读，recipient_id 过滤防止越权标记他人私信
    pub async fn mark_message_read_impl(
        &self,
        recipient_id: i64,
        message_id: i64,
    ) -> Result<bool> {
        let result = Messages::update_many()
            .col_expr(Column::IsRead, sea_orm::sea_query::Expr::value(true))
            .filter(Column::Id.eq(message_id))
            .filter(Column::RecipientId.eq(recipient_id))
            .exec(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("标记私信已读失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 标记某发件人发来的全部私信已读
    pub async fn mark_conversation_read_impl(
        &self,
        recipient_id: i64,
        sender_id: i64,
    ) -> Result<u64> {
        let result = Messages::update_many()
            .col_expr(Column::IsRead, sea_orm::sea_query::Expr::value(true))
            .filter(Column::SenderId.eq(sender_id))
            .filter(Column::RecipientId.eq(recipient_id))
            .filter(Column::IsRead.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("标记对话已读失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 分页查询私信并批量补齐收发双方信息
    async fn paginate_messages(
        &self,
        select: Select<Messages>,
        page: i64,
        size: i64,
    ) -> Result<MessageListResponse> {
        let page = page.max(1) as u64;
        let size = size.clamp(1, 100) as u64;

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询私信总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询私信页数失败: {e}")))?;

        let messages = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询私信列表失败: {e}")))?;

        // 批量查询收发双方
        let user_ids: Vec<i64> = messages
            .iter()
            .flat_map(|m| [m.sender_id, m.recipient_id])
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        let users = Users::find()
            .filter(UserColumn::Id.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询用户信息失败: {e}")))?;
        let user_map: HashMap<i64, UserModel> = users.into_iter().map(|u| (u.id, u)).collect();

        let participant = |id: i64| {
            user_map.get(&id).map(|u| MessageParticipant {
                id: u.id,
                first_name: u.first_name.clone(),
                last_name: u.last_name.clone(),
                role: UserRole::from_str(&u.role).unwrap_or(UserRole::Student),
            })
        };

        let items = messages
            .into_iter()
            .map(|m: MessageModel| {
                let sender = participant(m.sender_id);
                let recipient = participant(m.recipient_id);
                MessageListItem {
                    message: m.into_message(),
                    sender,
                    recipient,
                }
            })
            .collect();

        Ok(MessageListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
