/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - このサービスは stateless なので空 (将来の注入ポイントとして残す)
 * - Clone 前提で持つ
 */
#[derive(Clone, Debug, Default)]
pub struct AppState;

impl AppState {
    pub fn new() -> Self {
        Self
    }
}
