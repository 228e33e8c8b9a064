//! 中文界面文案

/// 回到顶部按钮
pub const SCROLL_TO_TOP: &str = "回到頂部";
/// 汉堡菜单
pub const TOGGLE_MENU: &str = "開啟或關閉選單";
/// 语言切换按钮
pub const TOGGLE_LANGUAGE: &str = "切換語言";
/// 页内导航按钮
pub const TOGGLE_PAGE_NAV: &str = "頁面導覽";
/// 加载层
pub const LOADING: &str = "載入中";
