//! Public "Sobre" page: what the platform is and how adoption works.

use leptos::prelude::*;

use crate::auth::policy::paths;
use crate::components::public_nav::PublicNav;

#[component]
pub fn SobrePage() -> impl IntoView {
    view! {
        <div class="sobre-page">
            <PublicNav/>
            <main class="sobre-page__main">
                <h1>"Sobre o MPet"</h1>
                <p>
                    "O MPet conecta ONGs de proteção animal a pessoas que querem "
                    "adotar. As ONGs cadastram seus cães e gatos; adotantes "
                    "navegam pelos perfis, demonstram interesse e conversam com "
                    "os voluntários responsáveis."
                </p>

                <section class="sobre-page__steps">
                    <h2>"Como funciona"</h2>
                    <ol>
                        <li>
                            <strong>"Cadastre-se e entre."</strong>
                            " Adotantes usam o CPF para acessar a plataforma."
                        </li>
                        <li>
                            <strong>"Dê match."</strong>
                            " Veja um pet por vez e curta os que combinarem com você."
                        </li>
                        <li>
                            <strong>"Converse com a ONG."</strong>
                            " Voluntários avaliam os interesses e respondem cada adotante."
                        </li>
                        <li>
                            <strong>"Adote."</strong>
                            " Com o interesse aprovado, a ONG combina a entrega responsável."
                        </li>
                    </ol>
                </section>

                <section class="sobre-page__ongs">
                    <h2>"Para ONGs e voluntários"</h2>
                    <p>
                        "Voluntários gerenciam os animais da própria ONG, acompanham "
                        "interesses recebidos e confirmam adoções. O acesso é feito "
                        "com o CPF cadastrado pela ONG."
                    </p>
                </section>

                <a class="sobre-page__cta" href=paths::LOGIN>"Começar agora"</a>
            </main>
        </div>
    }
}
