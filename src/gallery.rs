mod api_ext;
mod gallery_post;
mod my_photo;

pub use self::{
    api_ext::GalleryApi,
    gallery_post::{GalleryPost, GalleryPostDetails},
    my_photo::MyPhoto,
};
