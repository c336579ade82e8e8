//! Estimate Page
//!
//! Main page: header chrome, property card with the map, the three-step
//! wizard, and the disclaimer block.

use leptos::prelude::*;

use crate::components::google_map::GoogleMap;
use crate::components::lead_wizard::LeadWizard;

#[component]
pub fn EstimatePage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-gradient-to-br from-green-50 to-gray-200">
            <header class="bg-white/80 border-b shadow-sm sticky top-0 z-10 backdrop-blur-md">
                <div class="container mx-auto px-4 py-4 flex justify-between items-center max-w-4xl">
                    <span class="text-lg font-bold text-gray-800">"True Price Report"</span>
                    <nav class="flex items-center gap-4 text-sm text-gray-600">
                        <a href="/" class="hover:text-gray-900">"Find Value"</a>
                        <a href="/free-report" class="hover:text-gray-900">"Free Report"</a>
                    </nav>
                </div>
            </header>

            <main class="flex-1 flex items-center justify-center py-8 px-2">
                <div class="w-full max-w-lg mx-auto">
                    <div class="bg-white/90 shadow-2xl rounded-2xl border border-gray-200 p-6 sm:p-8">
                        <div class="text-center mb-8">
                            <h1 class="text-2xl sm:text-3xl font-bold text-gray-800 mb-2">
                                "This is Your Home, Correct?"
                            </h1>
                            <h2 class="text-lg sm:text-xl text-green-600 font-semibold">
                                "2159-2111 Point Mallard Dr"
                            </h2>
                        </div>

                        <div class="mb-8">
                            <div class="w-full h-48 sm:h-64 bg-gray-200 rounded-lg overflow-hidden border border-gray-300">
                                <GoogleMap />
                            </div>
                        </div>

                        <LeadWizard />

                        <div class="mt-8 pt-6 border-t border-gray-200">
                            <p class="text-xs sm:text-sm text-gray-600 leading-relaxed">
                                "By submitting my information in this form, I agree to be contacted by \
                                 licensed providers. I also agree to be contacted via call or text manual \
                                 and/or automatic to my cell phone provided, in order to receive the \
                                 information requested above."
                            </p>
                            <p class="text-xs sm:text-sm text-gray-600 leading-relaxed mt-3">
                                "Upon submission of your information, you will be directed to a home value \
                                 report sponsored by a licensed Sponsor of TruePriceReport. The report is \
                                 generated using several data aggregators of public information and cannot \
                                 be guaranteed to be accurate. You may opt out of contact at any time."
                            </p>
                        </div>
                    </div>
                </div>
            </main>

            <footer class="bg-gray-800 text-white py-6 mt-8">
                <div class="container mx-auto px-4 max-w-4xl flex flex-col md:flex-row justify-between items-center">
                    <div class="flex flex-wrap items-center gap-4 mb-4 md:mb-0">
                        <span class="font-semibold">"True Price Report"</span>
                        <a href="#" class="text-gray-300 hover:text-white transition">"Privacy Policy"</a>
                        <a href="#" class="text-gray-300 hover:text-white transition">"Disclosure"</a>
                    </div>
                </div>
            </footer>
        </div>
    }
}
