//! Well-known type and annotation identities.

/// Framework types.
pub mod types {
    pub const CONTROLLER: &str = "Microsoft.AspNetCore.Mvc.Controller";
    pub const CONTROLLER_BASE: &str = "Microsoft.AspNetCore.Mvc.ControllerBase";
    pub const PAGE_MODEL: &str = "Microsoft.AspNetCore.Mvc.RazorPages.PageModel";
    pub const OBJECT: &str = "object";
    pub const CANCELLATION_TOKEN: &str = "System.Threading.CancellationToken";
}

/// Framework annotations.
pub mod annotations {
    pub const ACTION_NAME: &str = "Microsoft.AspNetCore.Mvc.ActionNameAttribute";
    pub const AREA: &str = "Microsoft.AspNetCore.Mvc.AreaAttribute";
    pub const BIND_PROPERTIES: &str = "Microsoft.AspNetCore.Mvc.BindPropertiesAttribute";
    pub const BIND_PROPERTY: &str = "Microsoft.AspNetCore.Mvc.BindPropertyAttribute";
    pub const CONTROLLER: &str = "Microsoft.AspNetCore.Mvc.ControllerAttribute";
    pub const FROM_BODY: &str = "Microsoft.AspNetCore.Mvc.FromBodyAttribute";
    pub const FROM_FORM: &str = "Microsoft.AspNetCore.Mvc.FromFormAttribute";
    pub const FROM_HEADER: &str = "Microsoft.AspNetCore.Mvc.FromHeaderAttribute";
    pub const FROM_KEYED_SERVICES: &str = "Microsoft.Extensions.DependencyInjection.FromKeyedServicesAttribute";
    pub const FROM_QUERY: &str = "Microsoft.AspNetCore.Mvc.FromQueryAttribute";
    pub const FROM_ROUTE: &str = "Microsoft.AspNetCore.Mvc.FromRouteAttribute";
    pub const FROM_SERVICES: &str = "Microsoft.AspNetCore.Mvc.FromServicesAttribute";
    pub const NON_ACTION: &str = "Microsoft.AspNetCore.Mvc.NonActionAttribute";
    pub const NON_CONTROLLER: &str = "Microsoft.AspNetCore.Mvc.NonControllerAttribute";
    pub const NON_HANDLER: &str = "Microsoft.AspNetCore.Mvc.RazorPages.NonHandlerAttribute";

    pub const EXCLUDE_FROM_ROUTE_GENERATOR: &str = "SafeRouting.ExcludeFromRouteGeneratorAttribute";
    pub const ROUTE_GENERATOR_NAME: &str = "SafeRouting.RouteGeneratorNameAttribute";
}

/// Named annotation arguments.
pub mod arguments {
    pub const NAME: &str = "Name";
    pub const SUPPORTS_GET: &str = "SupportsGet";
}

pub fn is_controller_root(identity: &str) -> bool {
    identity == types::CONTROLLER || identity == types::CONTROLLER_BASE
}

pub fn is_page_root(identity: &str) -> bool {
    identity == types::PAGE_MODEL
}
