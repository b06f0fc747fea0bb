//! Route table for the product endpoints.
//!
//! Routing is data: [`ROUTES`] maps `(method, path)` to an [`Operation`], and
//! every operation names its own [`Visibility`]. [`router`] turns the table
//! into an Axum router, wrapping each endpoint in a policy layer that runs
//! before the handler.

use axum::{
    middleware::from_fn_with_state,
    routing::{on, MethodFilter, MethodRouter},
    Router,
};

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use ecom_auth::{Role, Visibility};
use ecom_core::ProductId;

use crate::authz;

pub mod products;
pub mod system;

/// Operations exposed by the product gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    GetById,
    Add,
    UpdateQuantity,
    GenerateDescription,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::List => "list_products",
            Operation::GetById => "get_product",
            Operation::Add => "add_product",
            Operation::UpdateQuantity => "update_product_quantity",
            Operation::GenerateDescription => "generate_product_description",
        }
    }

    /// Who may call this operation.
    ///
    /// Everything starts from the authenticated baseline; reads are opened to
    /// anonymous callers and mutations are narrowed to `admin_role`.
    pub fn visibility(self, admin_role: &Role) -> Visibility {
        match self {
            Operation::List | Operation::GetById => Visibility::Public,
            Operation::Add | Operation::UpdateQuantity | Operation::GenerateDescription => {
                Visibility::Role(admin_role.clone())
            }
        }
    }

    fn endpoint(self, filter: MethodFilter) -> MethodRouter {
        match self {
            Operation::List => on(filter, products::list_products),
            Operation::GetById => on(filter, products::get_product),
            Operation::Add => on(filter, products::add_product),
            Operation::UpdateQuantity => on(filter, products::update_product_quantity),
            Operation::GenerateDescription => on(filter, products::generate_product_description),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMethod {
    Get,
    Post,
}

impl RouteMethod {
    fn filter(self) -> MethodFilter {
        match self {
            RouteMethod::Get => MethodFilter::GET,
            RouteMethod::Post => MethodFilter::POST,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSpec {
    pub method: RouteMethod,
    pub path: &'static str,
    pub operation: Operation,
}

pub const ROUTES: &[RouteSpec] = &[
    RouteSpec {
        method: RouteMethod::Get,
        path: "/product",
        operation: Operation::List,
    },
    RouteSpec {
        method: RouteMethod::Get,
        path: "/product/:id",
        operation: Operation::GetById,
    },
    RouteSpec {
        method: RouteMethod::Post,
        path: "/product",
        operation: Operation::Add,
    },
    RouteSpec {
        method: RouteMethod::Post,
        path: "/product/product/:id/updatequantity/:quantity",
        operation: Operation::UpdateQuantity,
    },
    RouteSpec {
        method: RouteMethod::Post,
        path: "/product/product/generateproductdescription",
        operation: Operation::GenerateDescription,
    },
];

/// Bytes escaped in a single path segment (WHATWG path-segment set).
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Location of the get-by-id resource for `id`.
///
/// The id is opaque, so it is percent-encoded as one path segment; the path
/// extractor decodes it back on the way in.
pub fn product_location(id: &ProductId) -> String {
    format!("/product/{}", utf8_percent_encode(id.as_str(), PATH_SEGMENT))
}

/// Router for all product endpoints, policies attached.
pub fn router(admin_role: &Role) -> Router {
    ROUTES.iter().fold(Router::new(), |router, route| {
        let endpoint = route
            .operation
            .endpoint(route.method.filter())
            .route_layer(from_fn_with_state(
                route.operation.visibility(admin_role),
                authz::enforce_visibility,
            ));
        router.route(route.path, endpoint)
    })
}
