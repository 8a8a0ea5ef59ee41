pub(crate) fn website_prompt(name: &str, category: &str, location: &str) -> String {
    format!(
        "You are helping find the official website of a local business.

Rules:
- Only return a URL you are confident is the official website of this exact business.
- Do not guess or construct a domain from the business name.
- If you are not sure, return null.
- Respond with ONLY valid JSON of the form {{\"website\": \"<url>\"}} or {{\"website\": null}}, no comments, no extra text.

Business name: {name}
Category: {category}
Location: {location}"
    )
}

pub(crate) fn socials_prompt(website: &str) -> String {
    format!(
        "You are given a business website URL. If you can confidently identify official social media profile URLs for this business (Facebook, Instagram, LinkedIn, X/Twitter, YouTube), return them.

Rules:
- Only return links you are confident are official profiles for this same business.
- Do not guess or fabricate handles.
- If you are not sure, return an empty array.
- Respond with ONLY valid JSON: an array of URL strings, no comments, no extra text.

Website: {website}"
    )
}
