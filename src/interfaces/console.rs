//! コンソールインターフェース
//!
//! ポートフォリオページとセクション一覧をテキストとして描画します。
//! 取得・編集の操作自体はアプリケーション層のコントローラが担い、
//! ここでは表示のみを扱います。

mod page;
mod status_banner;

pub use page::{
    certificate_block, education_block, project_block, render_page, skill_list, work_block,
};
pub use status_banner::status_banner;
