use portfolio_shared::overrides::portfolio_table;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    // 页脚没有 data 属性，由覆盖表里的版权文案兜底
    let copyright = portfolio_table().footer();

    html! {
        <footer class="footer">
            <div class="container">
                <p>{ copyright.zh }</p>
            </div>
        </footer>
    }
}
