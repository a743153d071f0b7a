use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::history::export_url;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none px-2">
                <Link<Route> to={Route::Home} classes="btn btn-ghost text-xl gap-2">
                    <i class="fas fa-store"></i>
                    {"Pendapatan Pasar Ternak"}
                </Link<Route>>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-lg font-semibold text-gray-500" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none gap-2">
                <a class="btn btn-ghost btn-sm" href={export_url()} download="">
                    <i class="fas fa-file-excel"></i>
                    {" Unduh Data"}
                </a>
                <Link<Route> to={Route::Settings} classes="btn btn-ghost btn-sm">
                    <i class="fas fa-cog"></i>
                    {" Pengaturan"}
                </Link<Route>>
            </div>
        </div>
    }
}
