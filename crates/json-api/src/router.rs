//! App Router

use salvo::Router;

use crate::{carts, products};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("cart")
                .post(carts::add::handler)
                .push(Router::with_path("{user}").get(carts::get::handler))
                .push(
                    Router::with_path("{cart}/{product}")
                        .put(carts::update::handler)
                        .delete(carts::remove::handler),
                ),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .delete(products::delete::handler),
                ),
        )
}
