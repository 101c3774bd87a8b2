//! Resource endpoint families.

pub mod banner;
pub mod blog;
pub mod brand;
pub mod category;
pub mod coupon;
pub mod order;
pub mod page;
pub mod product;
pub mod product_image;
pub mod redirect;
pub mod script;
pub mod variant;

pub use banner::{Banner, BannerQueryParams, CreateUpdateBannerParams};
pub use blog::{Blog, LegacyDate, UpdateBlogParams};
pub use brand::{Brand, BrandQueryParams};
pub use category::{Category, CategoryQueryParams};
pub use coupon::{
    Coupon, CouponAppliesTo, CouponQueryParams, CouponRestrictedTo, CreateUpdateCouponParams,
};
pub use order::{
    BillingAddress, Order, OrderAddress, OrderCoupon, OrderFormField, OrderProduct,
    OrderProductAppliedDiscount, OrderProductOption, OrderProductsQueryParams, OrderQueryParams,
    OrderShipment, OrderShipmentItem, OrderShipmentQueryParams, OrderShippingAddress,
    OrderShippingFormField, OrderShippingQuotes, OrderSortDirection, OrderSortField,
    OrderSortQuery, OrderStatus, ShippingAddressQueryParams, UrlResource,
};
pub use page::{ContactField, CreatePageParams, Page, PageQueryParams, PageType, UpdatePageParams};
pub use product::{
    CreateProductParams, LimitedProductQueryParams, Product, ProductBulkPricingRule,
    ProductCustomField, ProductQueryParams, ProductVideo, UpdateProductParams,
};
pub use product_image::{CreateProductImageParams, ProductImage, UpdateProductImageParams};
pub use redirect::{
    from_paths, DeleteRedirectsParams, Redirect, RedirectQueryParams, RedirectTarget,
    RedirectUpsert,
};
pub use script::{Script, UpdateScriptParams};
pub use variant::{
    CreateVariantParams, ProductVariant, ProductVariantQueryParams, VariantOption,
    VariantQueryParams,
};
