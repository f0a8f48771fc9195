/// Storefront page served at `/`. Talks to the JSON routes below it.
pub(crate) const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Product Recommender</title>
    <style>
        body { font-family: Arial, sans-serif; background: #f6f8fa; margin: 0; padding: 20px; }
        h1, h2 { text-align: center; color: #333; }
        .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(250px, 1fr)); gap: 15px; }
        .card { background: white; border-radius: 10px; box-shadow: 0 2px 5px rgba(0,0,0,0.1); padding: 15px; text-align: center; }
        img { width: 100%; height: 180px; object-fit: cover; border-radius: 8px; }
        button { background: #007BFF; color: white; border: none; border-radius: 6px; padding: 8px 12px; cursor: pointer; margin-top: 10px; }
        button:hover { background: #0056b3; }
    </style>
</head>
<body>
    <h1>Product Recommender</h1>
    <div id="product-grid" class="grid"></div>

    <h2 style="margin-top:40px;">Recommended for You</h2>
    <div id="recommend-grid" class="grid"></div>

    <script>
        function card(p, extra) {
            const div = document.createElement('div');
            div.className = 'card';
            div.innerHTML = `
                <img src="${p.img || 'https://via.placeholder.com/250'}" />
                <h3>${p.title}</h3>
                <p>${p.desc}</p>
                ${extra}
            `;
            return div;
        }

        async function loadProducts() {
            const res = await fetch('/products');
            const data = await res.json();
            const grid = document.getElementById('product-grid');
            grid.innerHTML = '';
            data.forEach(p => {
                grid.appendChild(card(p, `<button onclick="likeProduct(${p.id})">Like</button>`));
            });
        }

        async function likeProduct(id) {
            await fetch('/like', {
                method: 'POST',
                headers: {'Content-Type': 'application/json'},
                body: JSON.stringify({id})
            });
            loadRecommendations();
        }

        async function loadRecommendations() {
            const res = await fetch('/recommend');
            const data = await res.json();
            const grid = document.getElementById('recommend-grid');
            grid.innerHTML = '';
            data.forEach(p => {
                grid.appendChild(card(p, `<p><strong>Score:</strong> ${p.score.toFixed(2)}</p>`));
            });
        }

        loadProducts();
    </script>
</body>
</html>
"#;
